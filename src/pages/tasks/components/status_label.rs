use leptos::*;

use crate::api::types::TaskStatus;

fn badge_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "bg-green-100 text-green-600",
        TaskStatus::Pending => "bg-yellow-100 text-yellow-600",
    }
}

#[component]
pub fn StatusBadge(status: TaskStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "px-3 py-1 rounded-full text-xs font-medium {}",
            badge_class(status),
        )>{status.label()}</span>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn pending_and_completed_use_distinct_styles() {
        let pending = render_to_string(|| view! { <StatusBadge status=TaskStatus::Pending/> });
        let completed =
            render_to_string(|| view! { <StatusBadge status=TaskStatus::Completed/> });

        assert!(pending.contains("bg-yellow-100 text-yellow-600"));
        assert!(pending.contains("pending"));
        assert!(completed.contains("bg-green-100 text-green-600"));
        assert!(completed.contains("completed"));
    }
}
