/*!
Определяет минимальный логгер, работающий с крейтом `log`.

Ничего сложного здесь нет: нужны только базовые уровни логов и вывод в
stderr, поэтому дополнительная зависимость ради этой функциональности не
привлекается.
*/

use log::Log;

/// Простейший логгер, пишущий в stderr.
///
/// Фильтрацию этот логгер не выполняет; он полагается на глобальную
/// настройку max_level крейта `log`.
#[derive(Debug)]
pub(crate) struct Logger(());

/// Одиночка, используемый как цель для реализации трейта `Log`.
const LOGGER: &'static Logger = &Logger(());

impl Logger {
    /// Создать логгер, пишущий в stderr, и установить его как глобальный.
    /// Если при установке возникла проблема, возвращается ошибка.
    pub(crate) fn init() -> Result<(), log::SetLoggerError> {
        log::set_logger(LOGGER)
    }
}

impl Log for Logger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        // Уровень лога устанавливается через log::set_max_level, поэтому
        // здесь фильтровать нечего.
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        eprintln_locked!(
            "{}|{}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        // eprintln_locked! сбрасывает при каждом вызове.
    }
}
