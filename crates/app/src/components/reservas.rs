use data::datetime::{formata_periodo, parse_data_iso};
use data::paging::{TAMANHO_PADRAO, fatia_pagina};
use data::reserva::{Reserva, ReservaFiltro, filtra_reservas, nome_da_sala};
use data::sala::{Sala, SalaFiltro, filtra_salas};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::confirmacao::ConfirmacaoModal;
use crate::components::paginacao::Paginacao;
use crate::components::participantes::ParticipantesModal;
use crate::sessao::usa_sessao;
use crate::toast::usa_toasts;

/// Listagem de reservas com filtros por sala e data, aplicados no
/// cliente sobre o lote já buscado.
#[allow(non_snake_case)]
#[component]
pub fn ReservasPage() -> impl IntoView {
    let sessao = usa_sessao();
    let toasts = usa_toasts();
    let limite = sessao.settings().limite_busca;

    let reservas = RwSignal::new(Vec::<Reserva>::new());
    let salas = RwSignal::new(Vec::<Sala>::new());
    let carregando = RwSignal::new(true);

    let filtro_sala = RwSignal::new(String::new());
    let filtro_data = RwSignal::new(String::new());
    let pagina = RwSignal::new(1usize);
    let tamanho = RwSignal::new(TAMANHO_PADRAO);

    let participantes_de = RwSignal::new(None::<Reserva>);
    let excluir = RwSignal::new(None::<i32>);
    let excluindo = RwSignal::new(false);

    spawn_local(async move {
        let gateway = sessao.gateway();
        match gateway.reservas(0, limite).await {
            Ok(lista) => reservas.set(lista),
            Err(erro) => toasts.erro(erro.mensagem()),
        }
        match gateway.salas(0, limite, None).await {
            Ok(lista) => salas.set(lista),
            Err(erro) => toasts.erro(erro.mensagem()),
        }
        carregando.set(false);
    });

    let filtradas = Memo::new(move |_| {
        let filtro = ReservaFiltro {
            sala_id: filtro_sala.with(|valor| valor.parse().ok()),
            data: filtro_data.with(|valor| parse_data_iso(valor)),
        };
        reservas.with(|lista| filtra_reservas(lista, &filtro))
    });
    let total_filtradas = Signal::derive(move || filtradas.with(|lista| lista.len()));

    let confirma_exclusao = Callback::new(move |_| {
        let Some(reserva_id) = excluir.get_untracked() else {
            return;
        };
        excluindo.set(true);
        spawn_local(async move {
            match sessao.gateway().deletar_reserva(reserva_id).await {
                Ok(_) => {
                    reservas.update(|lista| lista.retain(|reserva| reserva.id != reserva_id));
                    toasts.sucesso("Reserva excluída com sucesso!");
                }
                Err(erro) => toasts.erro(erro.mensagem()),
            }
            excluindo.set(false);
            excluir.set(None);
        });
    });
    let cancela_exclusao = Callback::new(move |_| excluir.set(None));

    view! {
        <div class="list-header">
            <h2>"Reservas"</h2>
            <a class="btn" href="/reservas/nova">
                "Nova Reserva"
            </a>
        </div>

        <div class="card">
            <div class="card-body">
                <div class="form-row">
                    <div class="form-control">
                        <label class="label">"Sala"</label>
                        <select
                            class="select"
                            prop:value=move || {
                                salas.track();
                                filtro_sala.get()
                            }
                            on:change=move |ev| {
                                filtro_sala.set(event_target_value(&ev));
                                pagina.set(1);
                            }
                        >
                            <option value="">"Todas as salas"</option>
                            {move || {
                                salas
                                    .with(|lista| filtra_salas(lista, &SalaFiltro::default()))
                                    .into_iter()
                                    .map(|sala| {
                                        view! {
                                            <option value=sala.id.to_string()>{sala.nome}</option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label">"Data"</label>
                        <input
                            class="input"
                            type="date"
                            prop:value=move || filtro_data.get()
                            on:change=move |ev| {
                                filtro_data.set(event_target_value(&ev));
                                pagina.set(1);
                            }
                        />
                    </div>
                </div>
            </div>
        </div>

        <div class="card">
            <div class="card-body">
                {move || {
                    if carregando.get() {
                        view! { <p class="text-muted">"Carregando reservas..."</p> }.into_any()
                    } else if total_filtradas.get() == 0 {
                        view! {
                            <p class="text-muted">
                                "Nenhuma reserva encontrada. Clique em \"Nova Reserva\" para criar uma."
                            </p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <table class="table table-zebra">
                                <thead>
                                    <tr>
                                        <th>"Sala"</th>
                                        <th>"Data e Hora"</th>
                                        <th>"Responsável"</th>
                                        <th>"Café"</th>
                                        <th>"Link"</th>
                                        <th>"Ações"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        let visiveis = filtradas
                                            .with(|lista| {
                                                fatia_pagina(lista, pagina.get(), tamanho.get())
                                            });
                                        salas
                                            .with(|lista_salas| {
                                                visiveis
                                                    .into_iter()
                                                    .map(|reserva| linha(
                                                        reserva,
                                                        lista_salas,
                                                        participantes_de,
                                                        excluir,
                                                    ))
                                                    .collect_view()
                                            })
                                    }}
                                </tbody>
                            </table>
                            <Paginacao pagina=pagina tamanho=tamanho total_itens=total_filtradas/>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>

        <ParticipantesModal reserva=participantes_de/>
        <ConfirmacaoModal
            aberto=Signal::derive(move || excluir.with(|valor| valor.is_some()))
            mensagem=Signal::stored("Tem certeza que deseja excluir esta reserva?".to_string())
            ocupado=excluindo
            ao_confirmar=confirma_exclusao
            ao_cancelar=cancela_exclusao
        />
    }
}

fn linha(
    reserva: Reserva,
    salas: &[Sala],
    participantes_de: RwSignal<Option<Reserva>>,
    excluir: RwSignal<Option<i32>>,
) -> impl IntoView + use<> {
    let nome_sala = nome_da_sala(&reserva, salas);
    let periodo = formata_periodo(reserva.data_hora_inicio, reserva.data_hora_fim);
    let responsavel = reserva.nome_responsavel().to_string();
    let cafe = reserva
        .cafe_quantidade
        .map(|quantidade| format!("{quantidade} un."))
        .unwrap_or_else(|| "-".to_string());
    let link = reserva.link_meet.clone().filter(|url| !url.is_empty());
    let reserva_id = reserva.id;
    let editar = format!("/reservas/{reserva_id}/editar");

    view! {
        <tr>
            <td>{nome_sala}</td>
            <td>{periodo}</td>
            <td>{responsavel}</td>
            <td>{cafe}</td>
            <td>
                {match link {
                    Some(url) => {
                        view! {
                            <a href=url target="_blank">
                                "Acessar"
                            </a>
                        }
                            .into_any()
                    }
                    None => view! { <span class="text-muted">"-"</span> }.into_any(),
                }}
            </td>
            <td class="row-actions">
                <a class="btn btn-sm btn-outline" href=editar>
                    "Editar"
                </a>
                <button
                    class="btn btn-sm btn-outline"
                    on:click=move |_| participantes_de.set(Some(reserva.clone()))
                >
                    "Participantes"
                </button>
                <button
                    class="btn btn-sm btn-error"
                    on:click=move |_| excluir.set(Some(reserva_id))
                >
                    "Excluir"
                </button>
            </td>
        </tr>
    }
}
