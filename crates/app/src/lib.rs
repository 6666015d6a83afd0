pub mod components;
pub mod sessao;
pub mod toast;

use common::settings::Settings;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;
use tracing::warn;

use components::dashboard::DashboardPage;
use components::historico::HistoricoPage;
use components::layout::Layout;
use components::login::LoginPage;
use components::registro::RegistroPage;
use components::reserva_form::ReservaFormPage;
use components::reservas::ReservasPage;
use components::salas::SalasPage;
use components::usuarios::UsuariosPage;
use sessao::{Sessao, perfil_do_usuario};
use toast::{ToastContainer, Toasts};

#[allow(non_snake_case)]
#[component]
pub fn App(settings: Settings) -> impl IntoView {
    provide_meta_context();

    let sessao = Sessao::new(settings);
    sessao.carrega();
    provide_context(sessao);
    provide_context(Toasts::new());

    // Sessão restaurada do storage: revalida o token e renova o perfil.
    if sessao.autenticado() {
        spawn_local(async move {
            match sessao.gateway().meu_perfil().await {
                Ok(usuario) => sessao.define_perfil(perfil_do_usuario(&usuario)),
                Err(erro) if erro.eh_autorizacao() => {
                    warn!("token salvo rejeitado, encerrando a sessão");
                    sessao.sair();
                }
                Err(erro) => warn!("perfil inicial: {}", erro.mensagem()),
            }
        });
    }

    view! {
        <Title text="Reserva de Salas"/>
        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/registro") view=RegistroPage/>
                <ParentRoute path=path!("") view=Layout>
                    <Route path=path!("") view=DashboardPage/>
                    <Route path=path!("reservas") view=ReservasPage/>
                    <Route path=path!("reservas/nova") view=ReservaFormPage/>
                    <Route path=path!("reservas/:id/editar") view=ReservaFormPage/>
                    <Route path=path!("salas") view=SalasPage/>
                    <Route path=path!("usuarios") view=UsuariosPage/>
                    <Route path=path!("historico") view=HistoricoPage/>
                </ParentRoute>
            </Routes>
        </Router>
        <ToastContainer/>
    }
}
