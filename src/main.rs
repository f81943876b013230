mod components;
mod config;
mod engine;
mod pages;
mod utils;

use yew::prelude::*;
use yew_router::prelude::*;

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <Landing /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"Lost at sea"}</h1>
                <p>{"That page is below crush depth."}</p>
                <a href="/">{"Back to the surface"}</a>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
