/*!
Этот модуль определяет макросы вывода сообщений и немного общего
изменяемого состояния.

Состояние отслеживает две вещи. Во-первых, должны ли вообще выводиться
сообщения для пользователя (например, об ошибках чтения файла); это
устанавливается один раз при разборе аргументов CLI и затем не меняется.
Во-вторых, столкнулся ли linegrep с условием ошибки. Кроме ошибок разбора
аргументов CLI, linegrep не прерывается при возникновении ошибки: он
сообщает о ней и продолжает со следующим файлом. Но раз ошибка произошла,
она должна изменить статус выхода, поэтому `err_message` переключает
глобальный флаг, который проверяется при завершении.
*/

use std::sync::atomic::{AtomicBool, Ordering};

/// Когда false, «сообщения» не будут выводиться.
static MESSAGES: AtomicBool = AtomicBool::new(false);
/// Переключается на true, когда выводится сообщение об ошибке.
static ERRORED: AtomicBool = AtomicBool::new(false);

/// Как eprintln, но блокирует stdout для предотвращения перемешивания строк.
///
/// Блокируется stdout, хотя вывод идёт в stderr: когда оба соответствуют
/// одному tty, это не даёт строкам результатов и строкам сообщений
/// перемешаться.
#[macro_export]
macro_rules! eprintln_locked {
    ($($tt:tt)*) => {{
        {
            use std::io::Write;

            let stdout = std::io::stdout().lock();
            let mut stderr = std::io::stderr().lock();
            // Ошибки записи здесь намеренно не поднимаются. Правдоподобная
            // ошибка — разрыв канала, и в этом случае нужно выйти
            // грациозно; иначе прерываемся с кодом ошибки, потому что
            // больше ничего сделать нельзя.
            if let Err(err) = write!(stderr, "lg: ") {
                if err.kind() == std::io::ErrorKind::BrokenPipe {
                    std::process::exit(0);
                } else {
                    std::process::exit(2);
                }
            }
            if let Err(err) = writeln!(stderr, $($tt)*) {
                if err.kind() == std::io::ErrorKind::BrokenPipe {
                    std::process::exit(0);
                } else {
                    std::process::exit(2);
                }
            }
            drop(stdout);
        }
    }}
}

/// Выводит неустранимое сообщение, если только сообщения не были отключены.
#[macro_export]
macro_rules! message {
    ($($tt:tt)*) => {
        if crate::messages::messages() {
            eprintln_locked!($($tt)*);
        }
    }
}

/// Как message, но устанавливает флаг «errored», который управляет
/// статусом выхода.
#[macro_export]
macro_rules! err_message {
    ($($tt:tt)*) => {
        crate::messages::set_errored();
        message!($($tt)*);
    }
}

/// Возвращает true тогда и только тогда, когда сообщения должны выводиться.
pub(crate) fn messages() -> bool {
    MESSAGES.load(Ordering::Relaxed)
}

/// Установить, должны ли сообщения выводиться.
///
/// По умолчанию они не выводятся.
pub(crate) fn set_messages(yes: bool) {
    MESSAGES.store(yes, Ordering::Relaxed)
}

/// Возвращает true тогда и только тогда, когда linegrep столкнулся с
/// неустранимой ошибкой.
pub(crate) fn errored() -> bool {
    ERRORED.load(Ordering::Relaxed)
}

/// Указать, что linegrep столкнулся с неустранимой ошибкой.
///
/// Вызывающие не должны использовать это напрямую; это вызывается
/// автоматически через макрос `err_message`.
pub(crate) fn set_errored() {
    ERRORED.store(true, Ordering::Relaxed);
}
