use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::toast::{ToastContainer, Toaster};
use crate::routes::ContactPage;
use crate::GlobalState;

#[component]
pub fn App() -> impl IntoView {
    let state = create_rw_signal(GlobalState::default());
    provide_meta_context();
    provide_context(state);
    provide_context(Toaster::new());

    view! {
        <Stylesheet id="bookmail" href="/pkg/tailwind.css"/>
        <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico"/>
        <Title text="Contact Us"/>
        <Router>
            <main class="min-h-screen bg-gray-100 py-4">
                <Routes>
                    <Route path="/" view=ContactPage/>
                    // single page, anything else lands on the form
                    <Route path="/*any" view=|| view! { <Redirect path="/"/> }/>
                </Routes>
            </main>
            <ToastContainer/>
        </Router>
    }
}
