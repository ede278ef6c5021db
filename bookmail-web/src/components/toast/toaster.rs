use leptos::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        // keep full class names, else tailwind will not add them to css
        match self {
            ToastKind::Success => {
                "flex items-center gap-3 min-w-[18rem] px-4 py-3 rounded-md \
                 shadow-md bg-green-50 text-green-800 border border-green-300"
            }
            ToastKind::Error => {
                "flex items-center gap-3 min-w-[18rem] px-4 py-3 rounded-md \
                 shadow-md bg-red-50 text-red-800 border border-red-300"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: Uuid,
    kind: ToastKind,
    message: String,
}

impl Toast {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Handle on the transient notification stack, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
        }
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn success<S: Into<String>>(&self, message: S) -> Uuid {
        self.push(ToastKind::Success, message.into())
    }

    pub fn error<S: Into<String>>(&self, message: S) -> Uuid {
        self.push(ToastKind::Error, message.into())
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.update(|toasts| {
            toasts.push(Toast { id, kind, message });
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let runtime = create_runtime();
        let toaster = Toaster::new();

        let sent = toaster.success("Email sent successfully!");
        let failed = toaster.error("Failed to send email: timeout");

        let toasts = toaster.toasts().get_untracked();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].kind(), ToastKind::Success);
        assert_eq!(toasts[1].message(), "Failed to send email: timeout");

        toaster.dismiss(sent);
        let toasts = toaster.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id(), failed);

        // unknown ids are ignored
        toaster.dismiss(sent);
        assert_eq!(toaster.toasts().get_untracked().len(), 1);

        runtime.dispose();
    }
}
