use leptos::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-300 p-6">
            <main class="max-w-5xl mx-auto">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-md border border-gray-200 p-6">
            {children()}
        </div>
    }
}
