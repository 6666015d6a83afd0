use std::time::Duration;

use data::datetime::formata_data_hora;
use data::reserva::nome_da_sala;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use tracing::{debug, info, warn};

use crate::components::notificacoes::NotificacoesModal;
use crate::components::perfil::PerfilModal;
use crate::sessao::usa_sessao;
use crate::toast::usa_toasts;

#[allow(non_snake_case)]
#[component]
pub fn Navbar() -> impl IntoView {
    let sessao = usa_sessao();
    let toasts = usa_toasts();

    let nao_vistas = RwSignal::new(0_i32);
    let notificacoes_abertas = RwSignal::new(false);
    let perfil_aberto = RwSignal::new(false);

    let atualiza_contador = move || {
        spawn_local(async move {
            match sessao.gateway().contar_reservas_nao_vistas().await {
                Ok(total) => nao_vistas.set(total),
                Err(erro) => debug!("contador de não vistas: {}", erro.mensagem()),
            }
        });
    };

    // Convites recém-criados: cada um vira um toast uma única vez,
    // porque a marcação de notificado acontece logo em seguida.
    let verifica_convites = move || {
        spawn_local(async move {
            let gateway = sessao.gateway();
            let convites = match gateway.minhas_reservas_convidadas(Some(true), None).await {
                Ok(convites) => convites,
                Err(erro) => {
                    debug!("convites não notificados: {}", erro.mensagem());
                    return;
                }
            };
            for convite in convites {
                let sala = nome_da_sala(&convite.reserva, &[]);
                toasts.sucesso(format!(
                    "Você foi convidado para uma reserva na sala {sala} em {}.",
                    formata_data_hora(convite.reserva.data_hora_inicio),
                ));
                if let Err(erro) = gateway
                    .marcar_reserva_como_notificada(convite.reserva.id)
                    .await
                {
                    warn!("marcar convite como notificado: {}", erro.mensagem());
                }
            }
            atualiza_contador();
        });
    };

    Effect::new(move |_| {
        if sessao.autenticado() {
            atualiza_contador();
            verifica_convites();
        }
    });

    // Dois ritmos de polling; os dois morrem com a navbar, que sai de
    // cena junto com a sessão.
    let segundos = sessao.settings().poll_segundos;
    if let Ok(contador) = set_interval_with_handle(
        move || {
            if sessao.autenticado() {
                atualiza_contador();
            }
        },
        Duration::from_secs(segundos),
    ) {
        on_cleanup(move || contador.clear());
    }
    if let Ok(convites) = set_interval_with_handle(
        move || {
            if sessao.autenticado() {
                verifica_convites();
            }
        },
        Duration::from_secs(segundos),
    ) {
        on_cleanup(move || convites.clear());
    }

    let ao_sair = move |_| {
        info!("sessão encerrada pelo usuário");
        sessao.sair();
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    let badge_convites = Callback::new(move |_: ()| atualiza_contador());

    view! {
        <div class="navbar">
            <a class="text-xl" href="/">"Reserva de Salas"</a>
            <ul class="menu-horizontal">
                <li>
                    <a href="/">"Dashboard"</a>
                </li>
                <li>
                    <a href="/reservas">"Reservas"</a>
                </li>
                <li>
                    <a href="/salas">"Salas"</a>
                </li>
                {move || {
                    sessao
                        .eh_admin()
                        .then(|| {
                            view! {
                                <li>
                                    <a href="/usuarios">"Usuários"</a>
                                </li>
                            }
                        })
                }}
                <li>
                    <a href="/historico">"Histórico"</a>
                </li>
            </ul>
            <div class="flex-none">
                <button
                    class="btn btn-ghost btn-circle indicator"
                    on:click=move |_| notificacoes_abertas.set(true)
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="20"
                        height="20"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    >
                        <path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"></path>
                        <path d="M10.3 21a1.94 1.94 0 0 0 3.4 0"></path>
                    </svg>
                    {move || {
                        (nao_vistas.get() > 0)
                            .then(|| {
                                view! {
                                    <span class="indicator-item">
                                        {nao_vistas.get().to_string()}
                                    </span>
                                }
                            })
                    }}
                </button>
                <button class="btn btn-ghost" on:click=move |_| perfil_aberto.set(true)>
                    {move || sessao.perfil().map(|p| p.exibicao().to_string()).unwrap_or_default()}
                </button>
                <button class="btn btn-outline btn-sm" on:click=ao_sair>
                    "Sair"
                </button>
            </div>
        </div>
        <NotificacoesModal aberto=notificacoes_abertas ao_mudanca=badge_convites/>
        <PerfilModal aberto=perfil_aberto/>
    }
}
