/*!
Вспомогательные типы и процедуры, разделяемые форматтерами.
*/

/// Значение поля форматтера, которое может быть целым числом, а может и не
/// быть им.
///
/// Номера строк и смещения приходят к форматтерам из внешних источников,
/// которые не обязаны быть строго типизированными. Этот тип делает проверку
/// «должно быть целым числом» выразимой: построение из строки даёт
/// [`FieldValue::Text`], и такая проверка его отвергает, даже когда строка
/// пуста. Нуль и отрицательные целые числа — допустимые значения по этому
/// контракту; проверка — это проверка рода, а не диапазона.
///
/// Преобразования из чисел с плавающей точкой намеренно не предоставляются.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldValue {
    /// Целочисленное значение.
    Int(i64),
    /// Любое нецелочисленное значение, сохранённое как текст.
    Text(String),
}

impl FieldValue {
    /// Возвращает true тогда и только тогда, когда это целое число.
    pub fn is_int(&self) -> bool {
        matches!(*self, FieldValue::Int(_))
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::Text(ref s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> FieldValue {
        FieldValue::Int(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> FieldValue {
        FieldValue::Int(i64::from(n))
    }
}

impl From<usize> for FieldValue {
    fn from(n: usize) -> FieldValue {
        FieldValue::Int(n as i64)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> FieldValue {
        FieldValue::Text(s)
    }
}

/// Срезает ведущие и завершающие пробелы.
///
/// Срезается только символ пробела. Табуляции, внутренние пробелы и
/// терминаторы строк сохраняются как есть, чтобы содержимое строки
/// оставалось исходным.
pub(crate) fn trim_spaces(text: &str) -> &str {
    text.trim_matches(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_int() {
        assert!(FieldValue::from(0).is_int());
        assert!(FieldValue::from(-1i64).is_int());
        assert!(FieldValue::from(42usize).is_int());
    }

    #[test]
    fn strings_are_not_int() {
        assert!(!FieldValue::from("").is_int());
        assert!(!FieldValue::from("7").is_int());
        assert!(!FieldValue::from(String::from("abc")).is_int());
    }

    #[test]
    fn display_renders_raw_value() {
        assert_eq!("5", FieldValue::from(5).to_string());
        assert_eq!("-3", FieldValue::from(-3i64).to_string());
        assert_eq!("abc", FieldValue::from("abc").to_string());
    }

    #[test]
    fn trim_strips_spaces_only() {
        assert_eq!("text", trim_spaces("  text  "));
        assert_eq!("a  b", trim_spaces(" a  b "));
        assert_eq!("\ttext\n", trim_spaces(" \ttext\n "));
        assert_eq!("text\n", trim_spaces("text\n"));
        assert_eq!("", trim_spaces("   "));
    }
}
