use data::datetime::formata_data;
use data::paging::{TAMANHO_PADRAO, fatia_pagina};
use data::sala::{FiltroAtiva, Sala, SalaFiltro, filtra_salas};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::confirmacao::ConfirmacaoModal;
use crate::components::paginacao::Paginacao;
use crate::components::sala_modal::SalaModal;
use crate::sessao::usa_sessao;
use crate::toast::usa_toasts;

/// Catálogo de salas. Qualquer usuário consulta; criar, editar e
/// excluir são ações de administrador.
#[allow(non_snake_case)]
#[component]
pub fn SalasPage() -> impl IntoView {
    let sessao = usa_sessao();
    let toasts = usa_toasts();
    let limite = sessao.settings().limite_busca;

    let salas = RwSignal::new(Vec::<Sala>::new());
    let carregando = RwSignal::new(true);

    let busca = RwSignal::new(String::new());
    let situacao = RwSignal::new(FiltroAtiva::Todas.valor().to_string());
    let pagina = RwSignal::new(1usize);
    let tamanho = RwSignal::new(TAMANHO_PADRAO);

    let modal_aberto = RwSignal::new(false);
    let editando = RwSignal::new(None::<Sala>);
    let excluir = RwSignal::new(None::<i32>);
    let excluindo = RwSignal::new(false);

    let carrega = move || {
        spawn_local(async move {
            match sessao.gateway().salas(0, limite, None).await {
                Ok(lista) => salas.set(lista),
                Err(erro) => toasts.erro(erro.mensagem()),
            }
            carregando.set(false);
        });
    };
    carrega();

    let filtradas = Memo::new(move |_| {
        let filtro = SalaFiltro {
            texto: busca.get(),
            ativa: situacao.with(|valor| FiltroAtiva::do_valor(valor)),
        };
        salas.with(|lista| filtra_salas(lista, &filtro))
    });
    let total_filtradas = Signal::derive(move || filtradas.with(|lista| lista.len()));

    let ao_salvar = Callback::new(move |_: ()| carrega());
    let confirma_exclusao = Callback::new(move |_| {
        let Some(sala_id) = excluir.get_untracked() else {
            return;
        };
        excluindo.set(true);
        spawn_local(async move {
            match sessao.gateway().deletar_sala(sala_id).await {
                Ok(_) => {
                    toasts.sucesso("Sala excluída com sucesso!");
                    carrega();
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
            <h2>"Salas"</h2>
            {move || {
                sessao
                    .eh_admin()
                    .then(|| {
                        view! {
                            <button
                                class="btn"
                                on:click=move |_| {
                                    editando.set(None);
                                    modal_aberto.set(true);
                                }
                            >
                                "Nova Sala"
                            </button>
                        }
                    })
            }}
        </div>

        <div class="card">
            <div class="card-body">
                <div class="form-row">
                    <div class="form-control">
                        <label class="label">"Busca"</label>
                        <input
                            class="input"
                            type="text"
                            placeholder="Nome ou local"
                            prop:value=move || busca.get()
                            on:input=move |ev| {
                                busca.set(event_target_value(&ev));
                                pagina.set(1);
                            }
                        />
                    </div>
                    <div class="form-control">
                        <label class="label">"Situação"</label>
                        <select
                            class="select"
                            prop:value=move || situacao.get()
                            on:change=move |ev| {
                                situacao.set(event_target_value(&ev));
                                pagina.set(1);
                            }
                        >
                            <option value="todas">"Todas"</option>
                            <option value="ativas">"Ativas"</option>
                            <option value="inativas">"Inativas"</option>
                        </select>
                    </div>
                </div>
            </div>
        </div>

        <div class="card">
            <div class="card-body">
                {move || {
                    if carregando.get() {
                        view! { <p class="text-muted">"Carregando salas..."</p> }.into_any()
                    } else if total_filtradas.get() == 0 {
                        view! { <p class="text-muted">"Nenhuma sala encontrada."</p> }
                            .into_any()
                    } else {
                        view! {
                            <table class="table table-zebra">
                                <thead>
                                    <tr>
                                        <th>"Nome"</th>
                                        <th>"Local"</th>
                                        <th>"Capacidade"</th>
                                        <th>"Descrição"</th>
                                        <th>"Status"</th>
                                        <th>"Criado em"</th>
                                        {move || {
                                            sessao.eh_admin().then(|| view! { <th>"Ações"</th> })
                                        }}
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        filtradas
                                            .with(|lista| {
                                                fatia_pagina(lista, pagina.get(), tamanho.get())
                                            })
                                            .into_iter()
                                            .map(|sala| linha(sala, editando, modal_aberto, excluir))
                                            .collect_view()
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

        <SalaModal aberto=modal_aberto sala=editando ao_salvar=ao_salvar/>
        <ConfirmacaoModal
            aberto=Signal::derive(move || excluir.with(|valor| valor.is_some()))
            mensagem=Signal::stored("Tem certeza que deseja excluir esta sala?".to_string())
            ocupado=excluindo
            ao_confirmar=confirma_exclusao
            ao_cancelar=cancela_exclusao
        />
    }
}

fn linha(
    sala: Sala,
    editando: RwSignal<Option<Sala>>,
    modal_aberto: RwSignal<bool>,
    excluir: RwSignal<Option<i32>>,
) -> impl IntoView {
    let sessao = usa_sessao();
    let capacidade = sala
        .capacidade
        .map(|total| total.to_string())
        .unwrap_or_else(|| "-".to_string());
    let descricao = sala.descricao.clone().unwrap_or_else(|| "-".to_string());
    let criada_em = sala
        .created_at
        .map(|dt| formata_data(dt.date()))
        .unwrap_or_else(|| "-".to_string());
    let ativa = sala.ativa;
    let sala_id = sala.id;
    let nome = sala.nome.clone();

    view! {
        <tr>
            <td>{nome}</td>
            <td>{sala.local.clone()}</td>
            <td>{capacidade}</td>
            <td>{descricao}</td>
            <td>
                {if ativa {
                    view! { <span class="badge badge-success">"Ativa"</span> }
                } else {
                    view! { <span class="badge badge-error">"Inativa"</span> }
                }}
            </td>
            <td>{criada_em}</td>
            {move || {
                sessao
                    .eh_admin()
                    .then(|| {
                        let sala = sala.clone();
                        view! {
                            <td class="row-actions">
                                <button
                                    class="btn btn-sm btn-outline"
                                    on:click=move |_| {
                                        editando.set(Some(sala.clone()));
                                        modal_aberto.set(true);
                                    }
                                >
                                    "Editar"
                                </button>
                                <button
                                    class="btn btn-sm btn-error"
                                    on:click=move |_| excluir.set(Some(sala_id))
                                >
                                    "Excluir"
                                </button>
                            </td>
                        }
                    })
            }}
        </tr>
    }
}
