/*!
Точка входа в linegrep.
*/

use std::{io::Write, process::ExitCode};

use termcolor::{ColorChoice, StandardStream};

use crate::flags::{Args, OutputMode};

#[macro_use]
mod messages;

mod flags;
mod logger;
mod search;

fn main() -> ExitCode {
    match run(flags::parse()) {
        Ok(code) => code,
        Err(err) => {
            // Ищем ошибку разрыва канала. В этом случае выходим «грациозно»
            // с кодом успеха, по существующему соглашению Unix. Среда
            // выполнения Rust не запрашивает сигналы PIPE, поэтому вместо
            // сигнала мы получаем ошибку I/O.
            for cause in err.chain() {
                if let Some(ioerr) = cause.downcast_ref::<std::io::Error>() {
                    if ioerr.kind() == std::io::ErrorKind::BrokenPipe {
                        return ExitCode::from(0);
                    }
                }
            }
            eprintln_locked!("{:#}", err);
            ExitCode::from(2)
        }
    }
}

/// Основная точка входа для linegrep.
///
/// Статус выхода: 0, если хотя бы одно совпадение найдено и ошибок не было;
/// 1, если совпадений не было; 2, если произошла ошибка.
fn run(result: flags::ParseResult<Args>) -> anyhow::Result<ExitCode> {
    let args = match result {
        flags::ParseResult::Err(err) => return Err(err),
        flags::ParseResult::Special(mode) => return special(mode),
        flags::ParseResult::Ok(args) => args,
    };
    let matched = search::search_files(&args)?;
    Ok(if matched && !messages::errored() {
        ExitCode::from(0)
    } else if messages::errored() {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    })
}

/// Реализует «специальные» режимы linegrep: вывод справки и версии.
///
/// Специальный режим коротко замыкает обычную инициализацию, чтобы как
/// можно меньше могло помешать выводу справки.
fn special(mode: flags::SpecialMode) -> anyhow::Result<ExitCode> {
    let output = match mode {
        flags::SpecialMode::Help => flags::generate_help(),
        flags::SpecialMode::Version => flags::generate_version(),
    };
    writeln!(std::io::stdout(), "{}", output.trim_end())?;
    Ok(ExitCode::from(0))
}

/// Возвращает писатель в stdout для данного режима вывода.
///
/// Цветной режим всегда пропускает управляющие последовательности: их
/// вставляет сам форматтер, и пользователь запросил их явно флагом
/// `-c/--color`.
pub(crate) fn stdout(mode: OutputMode) -> StandardStream {
    let choice = match mode {
        OutputMode::Color => ColorChoice::Always,
        OutputMode::Standard | OutputMode::Machine => ColorChoice::Never,
    };
    StandardStream::stdout(choice)
}
