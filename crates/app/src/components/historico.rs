use chrono::Local;
use data::datetime::{formata_periodo, parse_data_iso};
use data::paging::{TAMANHO_PADRAO, fatia_pagina};
use data::reserva::{
    FiltroPapel, HistoricoFiltro, HistoricoItem, TipoHistorico, filtra_historico, nome_da_sala,
};
use data::sala::{Sala, SalaFiltro, filtra_salas};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::paginacao::Paginacao;
use crate::sessao::usa_sessao;
use crate::toast::usa_toasts;

/// Reuniões do usuário, como responsável ou convidado. O recorte
/// passado/futuro refaz a consulta; sala, data e papel filtram no
/// cliente.
#[allow(non_snake_case)]
#[component]
pub fn HistoricoPage() -> impl IntoView {
    let sessao = usa_sessao();
    let toasts = usa_toasts();
    let limite = sessao.settings().limite_busca;

    let itens = RwSignal::new(Vec::<HistoricoItem>::new());
    let salas = RwSignal::new(Vec::<Sala>::new());
    let carregando = RwSignal::new(true);

    let filtro_tipo = RwSignal::new(TipoHistorico::Todas.valor().to_string());
    let filtro_sala = RwSignal::new(String::new());
    let filtro_data = RwSignal::new(String::new());
    let filtro_papel = RwSignal::new(FiltroPapel::Todos.valor().to_string());
    let pagina = RwSignal::new(1usize);
    let tamanho = RwSignal::new(TAMANHO_PADRAO);

    let agora = Local::now().naive_local();

    spawn_local(async move {
        match sessao.gateway().salas(0, limite, None).await {
            Ok(lista) => salas.set(lista),
            Err(erro) => toasts.erro(erro.mensagem()),
        }
    });

    // O tipo muda as flags da consulta, então refaz a busca.
    Effect::new(move |_| {
        let (apenas_futuras, apenas_passadas) =
            filtro_tipo.with(|valor| TipoHistorico::do_valor(valor)).flags();
        carregando.set(true);
        spawn_local(async move {
            match sessao
                .gateway()
                .meu_historico(apenas_futuras, apenas_passadas, 0, limite)
                .await
            {
                Ok(lista) => itens.set(lista),
                Err(erro) => toasts.erro(erro.mensagem()),
            }
            carregando.set(false);
        });
    });

    let filtrados = Memo::new(move |_| {
        let filtro = HistoricoFiltro {
            sala_id: filtro_sala.with(|valor| valor.parse().ok()),
            data: filtro_data.with(|valor| parse_data_iso(valor)),
            papel: filtro_papel.with(|valor| FiltroPapel::do_valor(valor)),
        };
        itens.with(|lista| filtra_historico(lista, &filtro))
    });
    let total_filtrados = Signal::derive(move || filtrados.with(|lista| lista.len()));

    view! {
        <h2>"Histórico de Reuniões"</h2>

        <div class="card">
            <div class="card-body">
                <h3 class="card-title">"Filtros"</h3>
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
                                        let valor = sala.id.to_string();
                                        view! { <option value=valor>{sala.nome}</option> }
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
                    <div class="form-control">
                        <label class="label">"Tipo"</label>
                        <select
                            class="select"
                            prop:value=move || filtro_tipo.get()
                            on:change=move |ev| {
                                filtro_tipo.set(event_target_value(&ev));
                                pagina.set(1);
                            }
                        >
                            <option value="todas">"Todas"</option>
                            <option value="futuras">"Futuras"</option>
                            <option value="passadas">"Passadas"</option>
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label">"Papel"</label>
                        <select
                            class="select"
                            prop:value=move || filtro_papel.get()
                            on:change=move |ev| {
                                filtro_papel.set(event_target_value(&ev));
                                pagina.set(1);
                            }
                        >
                            <option value="todos">"Todos"</option>
                            <option value="responsavel">"Responsável"</option>
                            <option value="participante">"Participante"</option>
                        </select>
                    </div>
                </div>
            </div>
        </div>

        <div class="card">
            <div class="card-body">
                <h3 class="card-title">
                    {move || format!("Reuniões ({})", total_filtrados.get())}
                </h3>
                {move || {
                    if carregando.get() {
                        view! { <p class="text-muted">"Carregando histórico..."</p> }.into_any()
                    } else if total_filtrados.get() == 0 {
                        view! { <p class="text-muted">"Nenhuma reunião encontrada"</p> }
                            .into_any()
                    } else {
                        view! {
                            <table class="table table-zebra">
                                <thead>
                                    <tr>
                                        <th>"Sala"</th>
                                        <th>"Data e Hora"</th>
                                        <th>"Responsável"</th>
                                        <th>"Papel"</th>
                                        <th>"Café"</th>
                                        <th>"Link Meet"</th>
                                        <th>"Ações"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        let visiveis = filtrados
                                            .with(|lista| {
                                                fatia_pagina(lista, pagina.get(), tamanho.get())
                                            });
                                        salas
                                            .with(|lista_salas| {
                                                visiveis
                                                    .into_iter()
                                                    .map(|item| linha(item, lista_salas, agora))
                                                    .collect_view()
                                            })
                                    }}
                                </tbody>
                            </table>
                            <Paginacao pagina=pagina tamanho=tamanho total_itens=total_filtrados/>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

fn linha(item: HistoricoItem, salas: &[Sala], agora: chrono::NaiveDateTime) -> impl IntoView + use<> {
    let reserva = &item.reserva;
    let nome_sala = nome_da_sala(reserva, salas);
    let periodo = formata_periodo(reserva.data_hora_inicio, reserva.data_hora_fim);
    let responsavel = reserva.nome_responsavel().to_string();
    let cafe = reserva
        .cafe_quantidade
        .map(|quantidade| format!("{quantidade} un."))
        .unwrap_or_else(|| "-".to_string());
    let link = reserva.link_meet.clone().filter(|url| !url.is_empty());
    let editavel = item.sou_responsavel && reserva.eh_futura(agora);
    let editar = format!("/reservas/{}/editar", reserva.id);

    view! {
        <tr>
            <td>{nome_sala}</td>
            <td>{periodo}</td>
            <td>{responsavel}</td>
            <td>
                {if item.sou_responsavel {
                    view! { <span class="badge badge-info">"Responsável"</span> }
                } else {
                    view! { <span class="badge badge-neutral">"Participante"</span> }
                }}
            </td>
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
            <td>
                {editavel
                    .then(|| {
                        view! {
                            <a class="btn btn-sm btn-outline" href=editar>
                                "Editar"
                            </a>
                        }
                    })}
            </td>
        </tr>
    }
}
