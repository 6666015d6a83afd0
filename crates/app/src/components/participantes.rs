use data::participante::{Participante, candidatos_a_convite};
use data::reserva::Reserva;
use data::usuario::Usuario;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::sessao::usa_sessao;
use crate::toast::usa_toasts;

/// Convidados de uma reserva. O modal abre quando `reserva` recebe
/// `Some` e fecha devolvendo `None`; cada mutação recarrega a lista e
/// os candidatos restantes.
#[allow(non_snake_case)]
#[component]
pub fn ParticipantesModal(reserva: RwSignal<Option<Reserva>>) -> impl IntoView {
    let sessao = usa_sessao();
    let toasts = usa_toasts();

    let participantes = RwSignal::new(Vec::<Participante>::new());
    let candidatos = RwSignal::new(Vec::<Usuario>::new());
    let escolhido = RwSignal::new(String::new());
    let carregando = RwSignal::new(false);
    let ocupado = RwSignal::new(false);

    let carrega = move |reserva_id: i32, responsavel_id: i32| {
        carregando.set(true);
        spawn_local(async move {
            let gateway = sessao.gateway();
            let lista = match gateway.participantes_reserva(reserva_id).await {
                Ok(lista) => lista,
                Err(erro) => {
                    toasts.erro(erro.mensagem());
                    carregando.set(false);
                    return;
                }
            };
            match gateway.usuarios_nao_admin().await {
                Ok(usuarios) => {
                    candidatos.set(candidatos_a_convite(&usuarios, &lista, responsavel_id));
                }
                Err(erro) => toasts.erro(erro.mensagem()),
            }
            participantes.set(lista);
            carregando.set(false);
        });
    };

    // Recarrega a cada abertura.
    Effect::new(move |_| {
        if let Some((reserva_id, responsavel_id)) =
            reserva.with(|atual| atual.as_ref().map(|r| (r.id, r.responsavel_id)))
        {
            escolhido.set(String::new());
            carrega(reserva_id, responsavel_id);
        }
    });

    let adiciona = move |_| {
        let Some(usuario_id) = escolhido.get_untracked().parse::<i32>().ok() else {
            return;
        };
        let Some((reserva_id, responsavel_id)) = reserva
            .with_untracked(|atual| atual.as_ref().map(|r| (r.id, r.responsavel_id)))
        else {
            return;
        };
        ocupado.set(true);
        spawn_local(async move {
            match sessao
                .gateway()
                .adicionar_participante(reserva_id, usuario_id)
                .await
            {
                Ok(_) => {
                    escolhido.set(String::new());
                    carrega(reserva_id, responsavel_id);
                }
                Err(erro) => toasts.erro(erro.mensagem()),
            }
            ocupado.set(false);
        });
    };

    let remove = move |usuario_id: i32| {
        let Some((reserva_id, responsavel_id)) = reserva
            .with_untracked(|atual| atual.as_ref().map(|r| (r.id, r.responsavel_id)))
        else {
            return;
        };
        ocupado.set(true);
        spawn_local(async move {
            match sessao
                .gateway()
                .remover_participante(reserva_id, usuario_id)
                .await
            {
                Ok(_) => carrega(reserva_id, responsavel_id),
                Err(erro) => toasts.erro(erro.mensagem()),
            }
            ocupado.set(false);
        });
    };

    move || {
        reserva.with(|atual| atual.is_some()).then(|| {
            view! {
                <div class="modal">
                    <div class="modal-box">
                        <h3>"Participantes da Reserva"</h3>
                        {move || {
                            if carregando.get() {
                                view! {
                                    <p class="text-muted">"Carregando participantes..."</p>
                                }
                                    .into_any()
                            } else if participantes.with(|lista| lista.is_empty()) {
                                view! {
                                    <p class="text-muted">"Nenhum participante convidado."</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="plain-list">
                                        <For
                                            each=move || participantes.get()
                                            key=|participante| participante.id
                                            children=move |participante: Participante| {
                                                let nome = participante.nome().to_string();
                                                let usuario_id = participante.usuario_id;
                                                view! {
                                                    <li class="list-item">
                                                        <span>{nome}</span>
                                                        <button
                                                            class="btn btn-sm btn-error"
                                                            disabled=move || ocupado.get()
                                                            on:click=move |_| remove(usuario_id)
                                                        >
                                                            "Remover"
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
                        <div class="form-inline">
                            <select
                                class="select"
                                prop:value=move || {
                                    candidatos.track();
                                    escolhido.get()
                                }
                                on:change=move |ev| escolhido.set(event_target_value(&ev))
                            >
                                <option value="">"Selecione um usuário"</option>
                                {move || {
                                    candidatos
                                        .get()
                                        .into_iter()
                                        .map(|usuario| {
                                            let valor = usuario.id.to_string();
                                            let rotulo = usuario.exibicao().to_string();
                                            view! { <option value=valor>{rotulo}</option> }
                                        })
                                        .collect_view()
                                }}
                            </select>
                            <button
                                class="btn"
                                disabled=move || {
                                    ocupado.get() || escolhido.with(|valor| valor.is_empty())
                                }
                                on:click=adiciona
                            >
                                "Adicionar"
                            </button>
                        </div>
                        <div class="modal-action">
                            <button
                                class="btn btn-outline"
                                on:click=move |_| reserva.set(None)
                            >
                                "Fechar"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
