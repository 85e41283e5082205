use leptos::*;

use crate::api::ApiError;

/// Success/error notice pair owned by each view; setting one clears the
/// other so the two never show together.
#[derive(Clone, Default, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
        self.success = None;
    }

    pub fn set_api_error(&mut self, err: &ApiError, fallback: &str) {
        self.set_error(err.message_or(fallback));
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-500"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

/// Renders whichever notice a view currently holds.
#[component]
pub fn MessageBanner(message: RwSignal<MessageState>) -> impl IntoView {
    view! {
        <Show when=move || message.get().error.is_some() fallback=|| ()>
            <ErrorMessage message={message.get().error.clone().unwrap_or_default()} />
        </Show>
        <Show when=move || message.get().success.is_some() fallback=|| ()>
            <SuccessMessage message={message.get().success.clone().unwrap_or_default()} />
        </Show>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <p class="text-center text-gray-500 py-8">{title}</p>
    }
}
