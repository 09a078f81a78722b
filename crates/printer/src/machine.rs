use linegrep_searcher::MatchRecord;

use crate::{
    Formatter, InvalidInputError, SimpleFormatter,
    util::{FieldValue, trim_spaces},
};

/// Форматтер машиночитаемого вывода `файл:строка:смещение:содержимое`.
///
/// Расширяет [`SimpleFormatter`] начальным смещением совпадения. Проверка
/// входных данных делегируется простому форматтеру, и затем дополнительно
/// проверяется род смещения, поэтому порядок сообщений об ошибках совпадает
/// с порядком простого форматтера, а смещение проверяется последним.
#[derive(Clone, Debug)]
pub struct MachineReadableFormatter {
    simple: SimpleFormatter,
    start_pos: FieldValue,
}

impl MachineReadableFormatter {
    /// Создаёт форматтер для данного имени файла, номера строки, содержимого
    /// строки и начального смещения совпадения.
    ///
    /// Как и везде в этом крейте, проверка откладывается до
    /// [`format`](Formatter::format).
    pub fn new(
        file_name: impl Into<String>,
        line_no: impl Into<FieldValue>,
        line_text: impl Into<String>,
        start_pos: impl Into<FieldValue>,
    ) -> MachineReadableFormatter {
        MachineReadableFormatter {
            simple: SimpleFormatter::new(file_name, line_no, line_text),
            start_pos: start_pos.into(),
        }
    }

    /// Создаёт форматтер из записи о совпадении.
    pub fn from_record(
        file_name: impl Into<String>,
        record: &MatchRecord,
    ) -> MachineReadableFormatter {
        MachineReadableFormatter::new(
            file_name,
            record.line_index,
            record.line_text.clone(),
            record.start_offset,
        )
    }

    fn validate(&self) -> Result<(), InvalidInputError> {
        self.simple.validate()?;
        if !self.start_pos.is_int() {
            return Err(InvalidInputError::StartPosNotInteger);
        }
        Ok(())
    }
}

impl Formatter for MachineReadableFormatter {
    fn format(&self) -> Result<String, InvalidInputError> {
        self.validate()?;
        Ok(format!(
            "{}:{}:{}:{}",
            self.simple.file_name,
            self.simple.line_no,
            self.start_pos,
            trim_spaces(&self.simple.line_text)
        ))
    }
}
