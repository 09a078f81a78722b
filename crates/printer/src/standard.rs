use linegrep_searcher::MatchRecord;

use crate::{
    Formatter, InvalidInputError,
    util::{FieldValue, trim_spaces},
};

/// Форматтер читаемого человеком вывода `файл:строка:содержимое`.
///
/// Содержимое строки срезается от ведущих и завершающих пробелов; табуляции
/// и терминатор строки сохраняются.
///
/// # Пример
///
/// ```
/// use linegrep_printer::{Formatter, SimpleFormatter};
///
/// let formatter = SimpleFormatter::new("file_name", 0, " text ");
/// assert_eq!("file_name:0:text", formatter.format().unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct SimpleFormatter {
    pub(crate) file_name: String,
    pub(crate) line_no: FieldValue,
    pub(crate) line_text: String,
}

impl SimpleFormatter {
    /// Создаёт форматтер для данного имени файла, номера строки и
    /// содержимого строки.
    ///
    /// Входные данные здесь не проверяются. Проверка откладывается до
    /// [`format`](Formatter::format) и выполняется при каждом его вызове.
    pub fn new(
        file_name: impl Into<String>,
        line_no: impl Into<FieldValue>,
        line_text: impl Into<String>,
    ) -> SimpleFormatter {
        SimpleFormatter {
            file_name: file_name.into(),
            line_no: line_no.into(),
            line_text: line_text.into(),
        }
    }

    /// Создаёт форматтер из записи о совпадении.
    pub fn from_record(
        file_name: impl Into<String>,
        record: &MatchRecord,
    ) -> SimpleFormatter {
        SimpleFormatter::new(file_name, record.line_index, record.line_text.clone())
    }

    /// Проверяет входные данные, полученные при построении.
    ///
    /// Проверки выполняются в фиксированном порядке: имя файла, затем род
    /// номера строки, затем наличие содержимого. Сообщается первая не
    /// прошедшая проверка.
    pub(crate) fn validate(&self) -> Result<(), InvalidInputError> {
        if self.file_name.is_empty() {
            return Err(InvalidInputError::MissingFileName);
        }
        if !self.line_no.is_int() {
            return Err(InvalidInputError::LineNoNotInteger);
        }
        if self.line_text.is_empty() {
            return Err(InvalidInputError::MissingLine);
        }
        Ok(())
    }
}

impl Formatter for SimpleFormatter {
    fn format(&self) -> Result<String, InvalidInputError> {
        self.validate()?;
        Ok(format!(
            "{}:{}:{}",
            self.file_name,
            self.line_no,
            trim_spaces(&self.line_text)
        ))
    }
}
