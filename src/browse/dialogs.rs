/// User-facing capabilities the controller needs from the UI layer.
pub trait Dialogs {
    /// Ask an explicit yes/no question. `true` means the user agreed.
    fn confirm(&self, question: &str) -> bool;

    /// Show a dismissible error notification.
    fn notify_error(&self, message: &str);
}
