use linegrep_searcher::MatchRecord;

use crate::{Formatter, InvalidInputError, util::trim_spaces};

/// ANSI-последовательность начала красного цвета.
///
/// Точные байты имеют значение: терминалы и тесты рассчитывают именно на
/// эту последовательность.
pub const RED: &str = "\x1b[0;31m";

/// ANSI-последовательность сброса цвета.
pub const RESET: &str = "\x1b[0m";

/// Форматтер, выделяющий совпавшую подстроку красным цветом.
///
/// В отличие от остальных форматтеров, этот не показывает метаданные файла
/// и строки: он предназначен для подсветки в терминале, а не для
/// журналоподобного вывода. Оборачивается только ПЕРВОЕ вхождение
/// подстроки; последующие вхождения остаются нетронутыми.
///
/// Пустая совпавшая подстрока отвергается проверкой, хотя поисковик может
/// выдать её для шаблона нулевой ширины. Это известная несогласованность
/// двух компонентов, сохранённая намеренно; вызывающий должен донести её
/// до пользователя как ошибку, а не разрешать молча.
#[derive(Clone, Debug)]
pub struct ColoredFormatter {
    line_text: String,
    matched_substring: String,
}

impl ColoredFormatter {
    /// Создаёт форматтер для данного содержимого строки и совпавшей
    /// подстроки.
    pub fn new(
        line_text: impl Into<String>,
        matched_substring: impl Into<String>,
    ) -> ColoredFormatter {
        ColoredFormatter {
            line_text: line_text.into(),
            matched_substring: matched_substring.into(),
        }
    }

    /// Создаёт форматтер из записи о совпадении.
    pub fn from_record(record: &MatchRecord) -> ColoredFormatter {
        ColoredFormatter::new(
            record.line_text.clone(),
            record.matched_substring.clone(),
        )
    }

    fn validate(&self) -> Result<(), InvalidInputError> {
        if self.line_text.is_empty() {
            return Err(InvalidInputError::MissingLine);
        }
        if self.matched_substring.is_empty() {
            return Err(InvalidInputError::MissingRegexResult);
        }
        Ok(())
    }
}

impl Formatter for ColoredFormatter {
    fn format(&self) -> Result<String, InvalidInputError> {
        self.validate()?;
        let highlighted = format!("{}{}{}", RED, self.matched_substring, RESET);
        let colored_line =
            self.line_text.replacen(&self.matched_substring, &highlighted, 1);
        Ok(trim_spaces(&colored_line).to_string())
    }
}
