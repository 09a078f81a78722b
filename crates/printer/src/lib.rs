/*!
Этот крейт предоставляет форматтеры, которые превращают записи о совпадениях
крейта `linegrep-searcher` в отображаемые строки.

# Краткий обзор

Форматтер [`SimpleFormatter`] показывает результат в читаемом человеком
формате `файл:строка:содержимое`, смоделированном по форматам стандартных
grep-подобных инструментов.

Форматтер [`MachineReadableFormatter`] показывает результат в машиночитаемом
формате `файл:строка:смещение:содержимое`.

Форматтер [`ColoredFormatter`] выделяет совпавшую подстроку ANSI-кодами
красного цвета для вывода в терминал; метаданные файла и строки он не
показывает.

Каждый форматтер — это одноразовая задача отрисовки: он строится для одной
записи, отрисовывается и выбрасывается. Перед каждой отрисовкой форматтер
проверяет свои входные данные и при недействительном входе возвращает
[`InvalidInputError`]. Проверка выполняется при каждом вызове `format`,
поэтому форматтер, построенный с недействительным состоянием, отказывает
одинаково независимо от того, сколько раз его просят отрисоваться.

# Пример

```
use linegrep_printer::{Formatter, SimpleFormatter};

let formatter = SimpleFormatter::new("file_name", 0, "text");
assert_eq!("file_name:0:text", formatter.format().unwrap());
```
*/

pub use crate::{
    color::{ColoredFormatter, RED, RESET},
    machine::MachineReadableFormatter,
    standard::SimpleFormatter,
    util::FieldValue,
};

mod color;
mod machine;
mod standard;
mod util;

/// Общий контракт всех форматтеров.
///
/// `format` сначала проверяет входные данные, полученные при построении, и
/// только затем отрисовывает их. Отрисовка детерминирована: повторные вызовы
/// на одном и том же экземпляре возвращают идентичный результат.
pub trait Formatter {
    /// Отрисовывает эту запись в отображаемую строку.
    fn format(&self) -> Result<String, InvalidInputError>;
}

/// Ошибка, которая может возникнуть при проверке входных данных форматтера.
///
/// Это единственный вид ошибки в этом крейте. Проверка замыкается накоротко:
/// сообщается первая не прошедшая проверка, ошибки не накапливаются.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvalidInputError {
    /// Имя файла отсутствует (пустая строка).
    MissingFileName,
    /// Номер строки не является целым числом.
    LineNoNotInteger,
    /// Содержимое строки отсутствует (пустая строка).
    MissingLine,
    /// Начальное смещение не является целым числом.
    StartPosNotInteger,
    /// Совпавшая подстрока отсутствует (пустая строка).
    MissingRegexResult,
}

impl std::error::Error for InvalidInputError {}

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            InvalidInputError::MissingFileName => {
                write!(f, "missing file name")
            }
            InvalidInputError::LineNoNotInteger => {
                write!(f, "line_no should be an integer")
            }
            InvalidInputError::MissingLine => write!(f, "missing line"),
            InvalidInputError::StartPosNotInteger => {
                write!(f, "start_pos should be an integer")
            }
            InvalidInputError::MissingRegexResult => {
                write!(f, "missing regex_result")
            }
        }
    }
}
