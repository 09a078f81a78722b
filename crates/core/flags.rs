/*!
Разбирает аргументы командной строки в структурированное и типизированное
представление.
*/

use std::{ffi::OsString, path::PathBuf};

use anyhow::Context;

use regex::Regex;

/// Строка использования, показываемая в справке и в ошибках разбора.
const USAGE: &str = "ИСПОЛЬЗОВАНИЕ: lg [-c | -m] <ШАБЛОН> <ФАЙЛ>...";

/// Результат разбора аргументов CLI.
///
/// Это в основном `anyhow::Result<T>`, но с одним дополнительным вариантом
/// для «специальных» режимов, то есть когда пользователь передал флаги
/// `-h/--help` или `-V/--version`. Специальный вариант позволяет разбору
/// коротко замкнуться и не требовать ни шаблона, ни файлов.
#[derive(Debug)]
pub(crate) enum ParseResult<T> {
    Special(SpecialMode),
    Ok(T),
    Err(anyhow::Error),
}

/// Режим, который коротко замыкает обычный поиск.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SpecialMode {
    /// Показать справку.
    Help,
    /// Показать версию.
    Version,
}

/// Режим вывода результатов.
///
/// Флаги `-c/--color` и `-m/--machine` взаимно исключают друг друга;
/// без обоих используется простой режим.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum OutputMode {
    /// `файл:строка:содержимое`.
    Standard,
    /// `файл:строка:смещение:содержимое`.
    Machine,
    /// Совпавшая подстрока выделяется красным цветом.
    Color,
}

/// Высокоуровневое представление аргументов CLI.
#[derive(Debug)]
pub(crate) struct Args {
    /// Скомпилированный шаблон поиска.
    pub(crate) pattern: Regex,
    /// Файлы для поиска, в порядке командной строки.
    pub(crate) paths: Vec<PathBuf>,
    /// Выбранный режим вывода.
    pub(crate) mode: OutputMode,
}

/// Уровень подробности журнала, запрошенный в CLI.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LoggingMode {
    Debug,
    Trace,
}

/// Низкоуровневое представление аргументов CLI, близкое к самим флагам.
#[derive(Debug, Default, Eq, PartialEq)]
struct LowArgs {
    special: Option<SpecialMode>,
    color: bool,
    machine: bool,
    logging: Option<LoggingMode>,
    positional: Vec<OsString>,
}

/// Разбирает аргументы CLI и преобразует их в высокоуровневое представление.
///
/// Это также устанавливает однопроходное глобальное состояние: логгер,
/// уровень журнала и флаг вывода сообщений.
pub(crate) fn parse() -> ParseResult<Args> {
    if let Err(err) = crate::logger::Logger::init() {
        let err = anyhow::anyhow!("не удалось инициализировать логгер: {err}");
        return ParseResult::Err(err);
    }
    crate::messages::set_messages(true);

    let mut low = match parse_low(std::env::args_os().skip(1)) {
        Ok(low) => low,
        Err(err) => return ParseResult::Err(err),
    };
    set_log_levels(&low);
    // Специальный режим завершает разбор досрочно: справке и версии не
    // нужны ни шаблон, ни файлы.
    if let Some(special) = low.special.take() {
        return ParseResult::Special(special);
    }
    match from_low(low) {
        Ok(args) => ParseResult::Ok(args),
        Err(err) => ParseResult::Err(err),
    }
}

/// Разбирает последовательность аргументов CLI в низкоуровневое
/// представление.
///
/// Данный итератор *не* должен начинаться с имени бинарного файла.
fn parse_low(
    rawargs: impl IntoIterator<Item = impl Into<OsString>>,
) -> anyhow::Result<LowArgs> {
    let mut low = LowArgs::default();
    let mut p = lexopt::Parser::from_args(rawargs);
    while let Some(arg) = p.next().context("недействительные аргументы CLI")? {
        match arg {
            lexopt::Arg::Value(value) => low.positional.push(value),
            lexopt::Arg::Short('h') | lexopt::Arg::Long("help") => {
                low.special = Some(SpecialMode::Help);
            }
            lexopt::Arg::Short('V') | lexopt::Arg::Long("version") => {
                low.special = Some(SpecialMode::Version);
            }
            lexopt::Arg::Short('c') | lexopt::Arg::Long("color") => {
                low.color = true;
            }
            lexopt::Arg::Short('m') | lexopt::Arg::Long("machine") => {
                low.machine = true;
            }
            lexopt::Arg::Long("debug") => {
                low.logging = Some(LoggingMode::Debug);
            }
            lexopt::Arg::Long("trace") => {
                low.logging = Some(LoggingMode::Trace);
            }
            arg => return Err(arg.unexpected().into()),
        }
    }
    Ok(low)
}

/// Преобразует низкоуровневые аргументы в высокоуровневое представление.
///
/// Здесь проверяется взаимная исключительность режимов вывода,
/// компилируется шаблон и проверяется, что указан хотя бы один файл.
fn from_low(low: LowArgs) -> anyhow::Result<Args> {
    if low.color && low.machine {
        anyhow::bail!(
            "флаги -c/--color и -m/--machine взаимно исключают друг друга\n{USAGE}"
        );
    }
    let mut positional = low.positional.into_iter();
    let pattern = match positional.next() {
        Some(pattern) => pattern,
        None => anyhow::bail!("отсутствует обязательный шаблон\n{USAGE}"),
    };
    let pattern = pattern
        .into_string()
        .map_err(|_| anyhow::anyhow!("шаблон должен быть валидным UTF-8"))?;
    let pattern = Regex::new(&pattern)
        .with_context(|| format!("недействительное регулярное выражение '{pattern}'"))?;
    let paths: Vec<PathBuf> = positional.map(PathBuf::from).collect();
    if paths.is_empty() {
        anyhow::bail!("не указан ни один файл для поиска\n{USAGE}");
    }
    let mode = if low.color {
        OutputMode::Color
    } else if low.machine {
        OutputMode::Machine
    } else {
        OutputMode::Standard
    };
    Ok(Args { pattern, paths, mode })
}

/// Устанавливает глобальный уровень журнала на основе низкоуровневых
/// аргументов.
fn set_log_levels(low: &LowArgs) {
    match low.logging {
        Some(LoggingMode::Trace) => {
            log::set_max_level(log::LevelFilter::Trace)
        }
        Some(LoggingMode::Debug) => {
            log::set_max_level(log::LevelFilter::Debug)
        }
        None => log::set_max_level(log::LevelFilter::Warn),
    }
}

/// Возвращает текст справки.
pub(crate) fn generate_help() -> String {
    format!(
        "\
lg {version}
Построчный поиск регулярного выражения в одном или нескольких файлах.

{USAGE}

ФЛАГИ:
    -c, --color      подсветить совпавший текст
    -m, --machine    машиночитаемый вывод
        --debug      показать отладочные сообщения
        --trace      показать сообщения трассировки
    -h, --help       показать эту справку
    -V, --version    показать версию
",
        version = env!("CARGO_PKG_VERSION"),
    )
}

/// Возвращает строку версии.
pub(crate) fn generate_version() -> String {
    format!("lg {}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn low(args: &[&str]) -> LowArgs {
        parse_low(args.iter().map(OsString::from)).unwrap()
    }

    fn hi(args: &[&str]) -> anyhow::Result<Args> {
        from_low(low(args))
    }

    #[test]
    fn default_mode_is_standard() {
        let args = hi(&["tli", "file.txt"]).unwrap();
        assert_eq!(OutputMode::Standard, args.mode);
        assert_eq!(vec![PathBuf::from("file.txt")], args.paths);
        assert_eq!("tli", args.pattern.as_str());
    }

    #[test]
    fn color_mode() {
        assert_eq!(OutputMode::Color, hi(&["-c", "tli", "f"]).unwrap().mode);
        assert_eq!(
            OutputMode::Color,
            hi(&["--color", "tli", "f"]).unwrap().mode
        );
    }

    #[test]
    fn machine_mode() {
        assert_eq!(OutputMode::Machine, hi(&["-m", "tli", "f"]).unwrap().mode);
        assert_eq!(
            OutputMode::Machine,
            hi(&["--machine", "tli", "f"]).unwrap().mode
        );
    }

    #[test]
    fn color_and_machine_are_mutually_exclusive() {
        assert!(hi(&["-c", "-m", "tli", "f"]).is_err());
        assert!(hi(&["--machine", "--color", "tli", "f"]).is_err());
    }

    #[test]
    fn pattern_is_required() {
        assert!(hi(&[]).is_err());
    }

    #[test]
    fn at_least_one_file_is_required() {
        assert!(hi(&["tli"]).is_err());
    }

    #[test]
    fn multiple_files_kept_in_order() {
        let args = hi(&["tli", "a", "b", "c"]).unwrap();
        assert_eq!(
            vec![PathBuf::from("a"), PathBuf::from("b"), PathBuf::from("c")],
            args.paths
        );
    }

    #[test]
    fn invalid_regex_is_a_cli_error() {
        assert!(hi(&["(", "f"]).is_err());
    }

    #[test]
    fn empty_pattern_is_valid() {
        let args = hi(&["", "f"]).unwrap();
        assert_eq!("", args.pattern.as_str());
    }

    #[test]
    fn help_and_version_are_special() {
        assert_eq!(Some(SpecialMode::Help), low(&["-h"]).special);
        assert_eq!(Some(SpecialMode::Help), low(&["--help"]).special);
        assert_eq!(Some(SpecialMode::Version), low(&["-V"]).special);
        assert_eq!(Some(SpecialMode::Version), low(&["--version"]).special);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(parse_low(["--no-such-flag"].map(OsString::from)).is_err());
    }

    #[test]
    fn logging_flags() {
        assert_eq!(Some(LoggingMode::Debug), low(&["--debug"]).logging);
        assert_eq!(Some(LoggingMode::Trace), low(&["--trace"]).logging);
        assert_eq!(None, low(&["x", "f"]).logging);
    }
}
