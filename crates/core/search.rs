/*!
Выполняет поиск по файлам и печатает результаты.
*/

use std::{io::Write, path::Path};

use bstr::ByteSlice;

use {
    linegrep_printer::{
        ColoredFormatter, Formatter, MachineReadableFormatter, SimpleFormatter,
    },
    linegrep_searcher::search,
};

use crate::flags::{Args, OutputMode};

/// Ищет шаблон во всех файлах, указанных в аргументах, по порядку.
///
/// Возвращает true, если хотя бы в одном файле было хотя бы одно
/// совпадение. Неудача чтения одного файла сообщается и не мешает
/// обработке остальных; ошибки записи в stdout поднимаются, чтобы разрыв
/// канала обрабатывался наверху.
pub(crate) fn search_files(args: &Args) -> anyhow::Result<bool> {
    let mut wtr = crate::stdout(args.mode);
    let mut matched = false;
    for path in args.paths.iter() {
        matched = search_file(path, args, &mut wtr)? || matched;
    }
    wtr.flush()?;
    Ok(matched)
}

/// Ищет шаблон в одном файле и печатает совпавшие строки.
fn search_file<W: Write>(
    path: &Path,
    args: &Args,
    wtr: &mut W,
) -> anyhow::Result<bool> {
    log::debug!("ищем в {}", path.display());
    let contents = match std::fs::read(path) {
        Ok(contents) => contents,
        Err(err) => {
            err_message!("{}: {}", path.display(), err);
            return Ok(false);
        }
    };
    let lines = split_lines(&contents);
    let file_name = path.display().to_string();

    let mut matched = false;
    for record in search(&lines, &args.pattern) {
        matched = true;
        let rendered = match args.mode {
            OutputMode::Standard => {
                SimpleFormatter::from_record(&*file_name, &record).format()
            }
            OutputMode::Machine => {
                MachineReadableFormatter::from_record(&*file_name, &record)
                    .format()
            }
            OutputMode::Color => ColoredFormatter::from_record(&record).format(),
        };
        match rendered {
            Ok(out) => write!(wtr, "{}", out)?,
            // Недействительный вход форматтера (например, совпадение
            // нулевой ширины в цветном режиме) — это ошибка этой строки,
            // а не всего прогона.
            Err(err) => {
                err_message!("{}:{}: {}", path.display(), record.line_index, err);
            }
        }
    }
    // Терминатор строки — часть содержимого, поэтому совпавшие строки
    // печатаются без добавления перевода строки, а файл завершается одним
    // явным переводом.
    writeln!(wtr)?;
    Ok(matched)
}

/// Разбивает содержимое файла на строки с сохранением терминаторов.
///
/// Содержимое, не являющееся валидным UTF-8, заменяется с потерями;
/// никакой другой нормализации не выполняется.
fn split_lines(contents: &[u8]) -> Vec<String> {
    contents
        .lines_with_terminator()
        .map(|line| line.to_str_lossy().into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_their_terminators() {
        let got = split_lines(b"one\ntwo\nthree");
        assert_eq!(
            vec!["one\n".to_string(), "two\n".to_string(), "three".to_string()],
            got
        );
    }

    #[test]
    fn empty_contents_give_no_lines() {
        assert!(split_lines(b"").is_empty());
    }

    #[test]
    fn crlf_terminators_survive() {
        let got = split_lines(b"one\r\ntwo\r\n");
        assert_eq!(vec!["one\r\n".to_string(), "two\r\n".to_string()], got);
    }

    #[test]
    fn invalid_utf8_is_replaced_lossily() {
        let got = split_lines(b"te\xffxt\n");
        assert_eq!(1, got.len());
        assert!(got[0].ends_with("xt\n"));
    }
}
