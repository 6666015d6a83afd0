use chrono::{NaiveDate, Timelike};
use data::datetime::{data_iso, parse_data_iso};
use data::forms::{ErrosFormulario, ReservaFormData};
use data::horarios::{horarios_livres, rotulo};
use data::reserva::ReservaUpdateInput;
use data::sala::{Sala, SalaFiltro, filtra_salas};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};

use crate::components::formulario::{AlertaErro, ErroCampo};
use crate::sessao::usa_sessao;
use crate::toast::usa_toasts;

/// Criação e edição de reservas. Os horários exibidos são o complemento
/// dos ocupados na sala e data escolhidas; em edição, o slot da própria
/// reserva continua selecionável enquanto sala e data não mudam.
#[allow(non_snake_case)]
#[component]
pub fn ReservaFormPage() -> impl IntoView {
    let sessao = usa_sessao();
    let toasts = usa_toasts();
    let settings = sessao.settings();
    let limite_busca = settings.limite_busca;
    let abertura = settings.abertura;
    let fechamento = settings.fechamento;

    let params = use_params_map();
    let reserva_id =
        params.with_untracked(|mapa| mapa.get("id").and_then(|valor| valor.parse::<i32>().ok()));
    let editando = reserva_id.is_some();

    // "?data=" vem dos atalhos do dashboard.
    let query = use_query_map();
    let data_inicial = if editando {
        String::new()
    } else {
        query.with_untracked(|mapa| {
            mapa.get("data")
                .and_then(|valor| parse_data_iso(&valor))
                .map(data_iso)
                .unwrap_or_default()
        })
    };

    let salas = RwSignal::new(Vec::<Sala>::new());
    let sala_id = RwSignal::new(String::new());
    let data = RwSignal::new(data_inicial);
    let horario = RwSignal::new(String::new());
    let cafe_quantidade = RwSignal::new(String::new());
    let cafe_descricao = RwSignal::new(String::new());
    let link_meet = RwSignal::new(String::new());
    let disponiveis = RwSignal::new(Vec::<String>::new());
    let erros = RwSignal::new(ErrosFormulario::new());
    let falha = RwSignal::new(None::<String>);
    let pendente = RwSignal::new(false);
    let carregando = RwSignal::new(editando);
    // Sala, data e rótulo originais da reserva em edição.
    let original = RwSignal::new(None::<(i32, NaiveDate, String)>);

    spawn_local(async move {
        match sessao
            .gateway()
            .salas(0, limite_busca, Some(true))
            .await
        {
            Ok(lista) => salas.set(lista),
            Err(erro) => toasts.erro(erro.mensagem()),
        }
    });

    if let Some(id) = reserva_id {
        spawn_local(async move {
            match sessao.gateway().reserva(id).await {
                Ok(reserva) => {
                    let dia = reserva.data_hora_inicio.date();
                    let rotulo_inicio = rotulo(reserva.data_hora_inicio.hour());
                    if let Some(sala) = reserva.sala_id {
                        original.set(Some((sala, dia, rotulo_inicio.clone())));
                        sala_id.set(sala.to_string());
                    }
                    data.set(data_iso(dia));
                    horario.set(rotulo_inicio);
                    cafe_quantidade.set(
                        reserva
                            .cafe_quantidade
                            .map(|quantidade| quantidade.to_string())
                            .unwrap_or_default(),
                    );
                    cafe_descricao.set(reserva.cafe_descricao.unwrap_or_default());
                    link_meet.set(reserva.link_meet.unwrap_or_default());
                }
                Err(erro) => toasts.erro(erro.mensagem()),
            }
            carregando.set(false);
        });
    }

    // Recalcula a disponibilidade quando sala ou data mudam. Trocar a
    // combinação invalida o horário escolhido.
    Effect::new(move |_| {
        let escolhida = sala_id.with(|valor| valor.trim().parse::<i32>().ok());
        let dia = data.with(|valor| parse_data_iso(valor));
        let (Some(escolhida), Some(dia)) = (escolhida, dia) else {
            disponiveis.set(Vec::new());
            horario.set(String::new());
            return;
        };
        let combinacao_original = original
            .with_untracked(|valor| valor.as_ref().map(|(sala, dia, _)| (*sala, *dia)))
            == Some((escolhida, dia));
        if !combinacao_original {
            horario.set(String::new());
        }
        spawn_local(async move {
            match sessao.gateway().horarios_ocupados(escolhida, dia).await {
                Ok(ocupados) => {
                    let mut livres = horarios_livres(&ocupados, abertura, fechamento);
                    if combinacao_original {
                        let rotulo_original = original
                            .with_untracked(|valor| valor.as_ref().map(|(_, _, r)| r.clone()));
                        if let Some(rotulo_original) = rotulo_original {
                            if !livres.contains(&rotulo_original) {
                                livres.push(rotulo_original);
                                livres.sort();
                            }
                        }
                    }
                    disponiveis.set(livres);
                }
                Err(erro) => toasts.erro(erro.mensagem()),
            }
        });
    });

    let ao_salvar = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ReservaFormData {
            sala_id: sala_id.get_untracked(),
            data: data.get_untracked(),
            horario: horario.get_untracked(),
            cafe_quantidade: cafe_quantidade.get_untracked(),
            cafe_descricao: cafe_descricao.get_untracked(),
            link_meet: link_meet.get_untracked(),
        };
        let validacao = form.valida();
        if !validacao.is_empty() {
            erros.set(validacao);
            return;
        }
        erros.set(ErrosFormulario::new());
        let Some(entrada) = form.to_input() else {
            return;
        };
        pendente.set(true);
        spawn_local(async move {
            let navigate = use_navigate();
            let resultado = match reserva_id {
                Some(id) => {
                    let corpo = ReservaUpdateInput {
                        sala_id: Some(entrada.sala_id),
                        data_hora_inicio: Some(entrada.data_hora_inicio),
                        data_hora_fim: Some(entrada.data_hora_fim),
                        cafe_quantidade: entrada.cafe_quantidade,
                        cafe_descricao: entrada.cafe_descricao.clone(),
                        link_meet: entrada.link_meet.clone(),
                    };
                    sessao
                        .gateway()
                        .atualizar_reserva(id, &corpo)
                        .await
                        .map(|_| "Reserva atualizada com sucesso!")
                }
                None => sessao
                    .gateway()
                    .criar_reserva(&entrada)
                    .await
                    .map(|_| "Reserva criada com sucesso!"),
            };
            match resultado {
                Ok(mensagem) => {
                    toasts.sucesso(mensagem);
                    falha.set(None);
                    pendente.set(false);
                    navigate("/reservas", Default::default());
                }
                Err(erro) => {
                    toasts.erro(erro.mensagem());
                    falha.set(Some(erro.mensagem().to_string()));
                    pendente.set(false);
                }
            }
        });
    };

    view! {
        <div class="card">
            <div class="card-body">
                <h2 class="card-title">
                    {if editando { "Editar Reserva" } else { "Nova Reserva" }}
                </h2>
                <p class="text-muted">
                    {if editando {
                        "Altere os dados da reserva. A duração é sempre de uma hora."
                    } else {
                        "Escolha a sala, a data e um horário livre. A duração é sempre de uma hora."
                    }}
                </p>
                <AlertaErro mensagem=falha/>
                {move || {
                    if carregando.get() {
                        view! { <p class="text-muted">"Carregando reserva..."</p> }.into_any()
                    } else {
                        view! {
                            <form on:submit=ao_salvar.clone()>
                                <div class="form-row">
                                    <div class="form-control">
                                        <label class="label">"Sala *"</label>
                                        <select
                                            class="select"
                                            prop:value=move || {
                                                salas.track();
                                                sala_id.get()
                                            }
                                            on:change=move |ev| sala_id.set(event_target_value(&ev))
                                        >
                                            <option value="">"Selecione uma sala"</option>
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
                                        <ErroCampo erros=erros campo="sala_id"/>
                                    </div>
                                    <div class="form-control">
                                        <label class="label">"Data *"</label>
                                        <input
                                            class="input"
                                            type="date"
                                            prop:value=move || data.get()
                                            on:change=move |ev| data.set(event_target_value(&ev))
                                        />
                                        <ErroCampo erros=erros campo="data"/>
                                    </div>
                                    <div class="form-control">
                                        <label class="label">"Horário *"</label>
                                        <select
                                            class="select"
                                            prop:value=move || {
                                                disponiveis.track();
                                                horario.get()
                                            }
                                            on:change=move |ev| horario.set(event_target_value(&ev))
                                        >
                                            <option value="">"Selecione um horário"</option>
                                            {move || {
                                                disponiveis
                                                    .get()
                                                    .into_iter()
                                                    .map(|slot| {
                                                        view! {
                                                            <option value=slot.clone()>{slot.clone()}</option>
                                                        }
                                                    })
                                                    .collect_view()
                                            }}
                                        </select>
                                        {move || {
                                            let escolhido = sala_id.with(|valor| !valor.is_empty())
                                                && data.with(|valor| !valor.is_empty());
                                            (escolhido && disponiveis.with(|lista| lista.is_empty()))
                                                .then(|| {
                                                    view! {
                                                        <p class="text-muted">
                                                            "Nenhum horário disponível para esta data."
                                                        </p>
                                                    }
                                                })
                                        }}
                                        <ErroCampo erros=erros campo="horario"/>
                                    </div>
                                </div>

                                <h4>"Opções de Café (Opcional)"</h4>
                                <div class="form-row">
                                    <div class="form-control">
                                        <label class="label">"Quantidade"</label>
                                        <input
                                            class="input"
                                            type="number"
                                            min="1"
                                            prop:value=move || cafe_quantidade.get()
                                            on:input=move |ev| {
                                                cafe_quantidade.set(event_target_value(&ev))
                                            }
                                        />
                                        <ErroCampo erros=erros campo="cafe_quantidade"/>
                                    </div>
                                    <div class="form-control">
                                        <label class="label">"Descrição do café"</label>
                                        <input
                                            class="input"
                                            type="text"
                                            placeholder="Ex: café e água para 10 pessoas"
                                            prop:value=move || cafe_descricao.get()
                                            on:input=move |ev| {
                                                cafe_descricao.set(event_target_value(&ev))
                                            }
                                        />
                                        <ErroCampo erros=erros campo="cafe_descricao"/>
                                    </div>
                                </div>

                                <div class="form-control">
                                    <label class="label">"Link do Meet"</label>
                                    <input
                                        class="input"
                                        type="text"
                                        placeholder="https://meet.google.com/..."
                                        prop:value=move || link_meet.get()
                                        on:input=move |ev| link_meet.set(event_target_value(&ev))
                                    />
                                    <ErroCampo erros=erros campo="link_meet"/>
                                </div>

                                <div class="row-actions">
                                    <button
                                        type="button"
                                        class="btn btn-outline"
                                        on:click=move |_| {
                                            let navigate = use_navigate();
                                            navigate("/reservas", Default::default());
                                        }
                                    >
                                        "Cancelar"
                                    </button>
                                    <button
                                        type="submit"
                                        class="btn"
                                        disabled=move || pendente.get()
                                    >
                                        {move || {
                                            if pendente.get() {
                                                "Salvando..."
                                            } else if editando {
                                                "Salvar Alterações"
                                            } else {
                                                "Criar Reserva"
                                            }
                                        }}
                                    </button>
                                </div>
                            </form>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
