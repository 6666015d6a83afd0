use data::paging::{self, ItemPaginacao, TAMANHOS_DE_PAGINA};
use leptos::prelude::*;

/// Barra de paginação local: resumo, tamanho de página e a navegação
/// com janela de números e reticências.
#[allow(non_snake_case)]
#[component]
pub fn Paginacao(
    pagina: RwSignal<usize>,
    tamanho: RwSignal<usize>,
    #[prop(into)] total_itens: Signal<usize>,
) -> impl IntoView {
    let total_paginas =
        Memo::new(move |_| paging::total_paginas(total_itens.get(), tamanho.get()));

    // Página fora do intervalo depois de filtrar ou redimensionar.
    Effect::new(move |_| {
        let ajustada = paging::ajusta_pagina(pagina.get(), total_paginas.get());
        if ajustada != pagina.get_untracked() {
            pagina.set(ajustada);
        }
    });

    view! {
        <div class="pagination-bar">
            <span class="pagination-info">
                {move || paging::resumo_exibicao(total_itens.get(), pagina.get(), tamanho.get())}
            </span>
            <label class="form-control form-inline">
                <span class="label">"Itens por página:"</span>
                <select
                    class="select"
                    prop:value=move || tamanho.get().to_string()
                    on:change=move |ev| {
                        if let Ok(novo) = event_target_value(&ev).parse() {
                            tamanho.set(novo);
                            pagina.set(1);
                        }
                    }
                >
                    {TAMANHOS_DE_PAGINA
                        .iter()
                        .map(|opcao| {
                            view! {
                                <option value=opcao.to_string()>{opcao.to_string()}</option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            {move || {
                let total = total_paginas.get();
                let atual = pagina.get();
                (total > 1)
                    .then(|| {
                        view! {
                            <div class="join">
                                <button
                                    class="btn btn-outline btn-sm join-item"
                                    disabled=atual <= 1
                                    on:click=move |_| {
                                        pagina.update(|p| *p = p.saturating_sub(1).max(1))
                                    }
                                >
                                    "Anterior"
                                </button>
                                {numeros(total, atual, pagina)}
                                <button
                                    class="btn btn-outline btn-sm join-item"
                                    disabled=atual >= total
                                    on:click=move |_| {
                                        let maximo = total_paginas.get_untracked();
                                        pagina.update(|p| *p = (*p + 1).min(maximo));
                                    }
                                >
                                    "Próxima"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

fn numeros(total: usize, atual: usize, pagina: RwSignal<usize>) -> impl IntoView {
    paging::itens_paginacao(total, atual)
        .into_iter()
        .map(|item| match item {
            ItemPaginacao::Pagina(numero) => {
                let classe = if numero == atual {
                    "btn btn-sm join-item btn-active"
                } else {
                    "btn btn-outline btn-sm join-item"
                };
                view! {
                    <button class=classe on:click=move |_| pagina.set(numero)>
                        {numero.to_string()}
                    </button>
                }
                .into_any()
            }
            ItemPaginacao::Reticencias => {
                view! { <span class="ellipsis join-item">"..."</span> }.into_any()
            }
        })
        .collect_view()
}
