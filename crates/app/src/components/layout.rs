use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use crate::components::navbar::Navbar;
use crate::sessao::usa_sessao;

/// Casca das rotas protegidas: sem sessão a navegação volta para o
/// login; com sessão, barra de navegação mais o conteúdo da rota.
#[allow(non_snake_case)]
#[component]
pub fn Layout() -> impl IntoView {
    let sessao = usa_sessao();

    move || {
        if sessao.autenticado() {
            view! {
                <Navbar/>
                <main class="container">
                    <Outlet/>
                </main>
            }
            .into_any()
        } else {
            view! { <Redirect path="/login"/> }.into_any()
        }
    }
}
