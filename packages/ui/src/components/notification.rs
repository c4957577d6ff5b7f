use std::time::Duration;

use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaTriangleExclamation};
use crate::timer::sleep;
use crate::Icon;

const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

/// Text for a notice key carried in a URL, e.g. `?messageKey=passwordUpdateSuccess`.
pub fn notice_message(key: &str) -> Option<&'static str> {
    match key {
        "passwordUpdateSuccess" => Some("Tu contraseña se ha actualizado. Ya puedes iniciar sesión."),
        "accountDeleted" => Some("Tu cuenta ha sido eliminada."),
        "sessionExpired" => Some("Tu sesión ha expirado. Inicia sesión de nuevo."),
        _ => None,
    }
}

/// How a notice key is shown: a rejected session is an error, the rest are confirmations.
pub fn notice_kind(key: &str) -> NotificationKind {
    match key {
        "sessionExpired" => NotificationKind::Error,
        _ => NotificationKind::Success,
    }
}

/// Toast that closes itself after a few seconds.
#[component]
pub fn Notification(
    message: String,
    #[props(default)] kind: NotificationKind,
    on_close: EventHandler<()>,
) -> Element {
    use_hook(move || {
        spawn(async move {
            sleep(AUTO_DISMISS).await;
            on_close.call(());
        });
    });

    let class = match kind {
        NotificationKind::Success => "notification notification-success",
        NotificationKind::Error => "notification notification-error",
    };

    rsx! {
        div {
            class,
            role: "status",
            if kind == NotificationKind::Success {
                Icon { icon: FaCircleCheck, width: 18, height: 18 }
            } else {
                Icon { icon: FaTriangleExclamation, width: 18, height: 18 }
            }
            span { class: "notification-text", "{message}" }
            button {
                class: "notification-close",
                aria_label: "Cerrar notificación",
                onclick: move |_| on_close.call(()),
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_keys() {
        assert_eq!(
            notice_message("accountDeleted"),
            Some("Tu cuenta ha sido eliminada.")
        );
        assert_eq!(notice_message("unknown"), None);
        assert_eq!(notice_kind("sessionExpired"), NotificationKind::Error);
        assert_eq!(notice_kind("passwordUpdateSuccess"), NotificationKind::Success);
    }
}
