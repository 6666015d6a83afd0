use data::datetime::formata_periodo;
use data::participante::ReservaConvidada;
use data::reserva::nome_da_sala;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::sessao::usa_sessao;
use crate::toast::usa_toasts;

/// Convites ainda não vistos pelo usuário. A lista é rebuscada a cada
/// abertura; marcar como vista tira o convite daqui e do selo do sino.
#[allow(non_snake_case)]
#[component]
pub fn NotificacoesModal(aberto: RwSignal<bool>, ao_mudanca: Callback<()>) -> impl IntoView {
    let sessao = usa_sessao();
    let toasts = usa_toasts();

    let convites = RwSignal::new(Vec::<ReservaConvidada>::new());
    let carregando = RwSignal::new(false);

    let carrega = move || {
        carregando.set(true);
        spawn_local(async move {
            match sessao
                .gateway()
                .minhas_reservas_convidadas(None, Some(true))
                .await
            {
                Ok(lista) => convites.set(lista),
                Err(erro) => toasts.erro(erro.mensagem()),
            }
            carregando.set(false);
        });
    };

    Effect::new(move |_| {
        if aberto.get() {
            carrega();
        }
    });

    let marca_como_vista = move |reserva_id: i32| {
        spawn_local(async move {
            match sessao.gateway().marcar_reserva_como_vista(reserva_id).await {
                Ok(_) => {
                    convites.update(|lista| lista.retain(|c| c.reserva.id != reserva_id));
                    ao_mudanca.run(());
                }
                Err(erro) => toasts.erro(erro.mensagem()),
            }
        });
    };

    move || {
        aberto.get().then(|| {
            view! {
                <div class="modal">
                    <div class="modal-box">
                        <h3>"Notificações de Reservas"</h3>
                        {move || {
                            if carregando.get() {
                                view! {
                                    <p class="text-muted">"Carregando notificações..."</p>
                                }
                                    .into_any()
                            } else if convites.with(|lista| lista.is_empty()) {
                                view! {
                                    <p class="text-muted">"Nenhuma notificação pendente."</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <p class="text-muted">
                                        "Você foi convidado para as seguintes reservas:"
                                    </p>
                                    <ul class="plain-list">
                                        <For
                                            each=move || convites.get()
                                            key=|convite| convite.id
                                            children=move |convite| {
                                                let reserva = convite.reserva;
                                                let sala = nome_da_sala(&reserva, &[]);
                                                let periodo = formata_periodo(
                                                    reserva.data_hora_inicio,
                                                    reserva.data_hora_fim,
                                                );
                                                let responsavel = format!(
                                                    "Responsável: {}",
                                                    reserva.nome_responsavel(),
                                                );
                                                let reserva_id = reserva.id;
                                                view! {
                                                    <li class="list-item">
                                                        <div>
                                                            <strong>{sala}</strong>
                                                            " "
                                                            <span class="badge badge-info">"Nova"</span>
                                                            <div class="text-muted">{periodo}</div>
                                                            <div class="text-muted">{responsavel}</div>
                                                        </div>
                                                        <button
                                                            class="btn btn-sm"
                                                            on:click=move |_| marca_como_vista(reserva_id)
                                                        >
                                                            "Marcar como Vista"
                                                        </button>
                                                    </li>
                                                }
                                            }
                                        />
                                    </ul>
                                }
                                    .into_any()
                            }
                        }}
                        <div class="modal-action">
                            <button class="btn btn-outline" on:click=move |_| aberto.set(false)>
                                "Fechar"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
