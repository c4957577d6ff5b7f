mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{FormError, Input, PasswordInput};

mod notification;
pub use notification::{notice_kind, notice_message, Notification, NotificationKind};

mod loading;
pub use loading::Loading;
