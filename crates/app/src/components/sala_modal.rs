use data::forms::{ErrosFormulario, SalaForm};
use data::sala::Sala;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::formulario::{AlertaErro, ErroCampo};
use crate::sessao::usa_sessao;
use crate::toast::usa_toasts;

/// Criação e edição de salas. `sala` com `Some` abre em modo edição; a
/// desativação só aparece aí, para não nascer sala inativa.
#[allow(non_snake_case)]
#[component]
pub fn SalaModal(
    aberto: RwSignal<bool>,
    sala: RwSignal<Option<Sala>>,
    ao_salvar: Callback<()>,
) -> impl IntoView {
    let sessao = usa_sessao();
    let toasts = usa_toasts();

    let nome = RwSignal::new(String::new());
    let local = RwSignal::new(String::new());
    let capacidade = RwSignal::new(String::new());
    let descricao = RwSignal::new(String::new());
    let ativa = RwSignal::new(true);
    let erros = RwSignal::new(ErrosFormulario::new());
    let falha = RwSignal::new(None::<String>);
    let pendente = RwSignal::new(false);

    // Preenche a cada abertura; criação parte de campos vazios.
    Effect::new(move |_| {
        if aberto.get() {
            match sala.get_untracked() {
                Some(atual) => {
                    nome.set(atual.nome);
                    local.set(atual.local);
                    capacidade.set(
                        atual
                            .capacidade
                            .map(|total| total.to_string())
                            .unwrap_or_default(),
                    );
                    descricao.set(atual.descricao.unwrap_or_default());
                    ativa.set(atual.ativa);
                }
                None => {
                    nome.set(String::new());
                    local.set(String::new());
                    capacidade.set(String::new());
                    descricao.set(String::new());
                    ativa.set(true);
                }
            }
            erros.set(ErrosFormulario::new());
            falha.set(None);
        }
    });

    let ao_submeter = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = SalaForm {
            nome: nome.get_untracked(),
            local: local.get_untracked(),
            capacidade: capacidade.get_untracked(),
            descricao: descricao.get_untracked(),
            ativa: ativa.get_untracked(),
        };
        let validacao = form.valida();
        if !validacao.is_empty() {
            erros.set(validacao);
            return;
        }
        erros.set(ErrosFormulario::new());
        pendente.set(true);
        let sala_id = sala.with_untracked(|atual| atual.as_ref().map(|s| s.id));
        spawn_local(async move {
            let resultado = match sala_id {
                Some(id) => sessao
                    .gateway()
                    .atualizar_sala(id, &form.to_update())
                    .await
                    .map(|_| "Sala atualizada com sucesso!"),
                None => sessao
                    .gateway()
                    .criar_sala(&form.to_input())
                    .await
                    .map(|_| "Sala criada com sucesso!"),
            };
            match resultado {
                Ok(mensagem) => {
                    toasts.sucesso(mensagem);
                    falha.set(None);
                    aberto.set(false);
                    ao_salvar.run(());
                }
                Err(erro) => {
                    toasts.erro(erro.mensagem());
                    falha.set(Some(erro.mensagem().to_string()));
                }
            }
            pendente.set(false);
        });
    };

    move || {
        aberto.get().then(|| {
            let editando = sala.with_untracked(|atual| atual.is_some());
            view! {
                <div class="modal">
                    <div class="modal-box">
                        <h3>{if editando { "Editar Sala" } else { "Nova Sala" }}</h3>
                        <AlertaErro mensagem=falha/>
                        <form on:submit=ao_submeter>
                            <div class="form-control">
                                <label class="label">"Nome *"</label>
                                <input
                                    class="input"
                                    type="text"
                                    placeholder="Ex: Sala de Reuniões 1"
                                    prop:value=move || nome.get()
                                    on:input=move |ev| nome.set(event_target_value(&ev))
                                />
                                <ErroCampo erros=erros campo="nome"/>
                            </div>
                            <div class="form-control">
                                <label class="label">"Local *"</label>
                                <input
                                    class="input"
                                    type="text"
                                    placeholder="Ex: 2º andar, Bloco B"
                                    prop:value=move || local.get()
                                    on:input=move |ev| local.set(event_target_value(&ev))
                                />
                                <ErroCampo erros=erros campo="local"/>
                            </div>
                            <div class="form-control">
                                <label class="label">"Capacidade"</label>
                                <input
                                    class="input"
                                    type="number"
                                    min="1"
                                    prop:value=move || capacidade.get()
                                    on:input=move |ev| capacidade.set(event_target_value(&ev))
                                />
                                <ErroCampo erros=erros campo="capacidade"/>
                            </div>
                            <div class="form-control">
                                <label class="label">"Descrição"</label>
                                <textarea
                                    class="textarea"
                                    prop:value=move || descricao.get()
                                    on:input=move |ev| descricao.set(event_target_value(&ev))
                                ></textarea>
                            </div>
                            {editando
                                .then(|| {
                                    view! {
                                        <div class="form-control">
                                            <label class="label">
                                                <input
                                                    class="checkbox"
                                                    type="checkbox"
                                                    prop:checked=move || ativa.get()
                                                    on:change=move |ev| {
                                                        ativa.set(event_target_checked(&ev))
                                                    }
                                                />
                                                " Sala ativa"
                                            </label>
                                        </div>
                                    }
                                })}
                            <div class="modal-action">
                                <button
                                    type="button"
                                    class="btn btn-outline"
                                    on:click=move |_| aberto.set(false)
                                >
                                    "Cancelar"
                                </button>
                                <button
                                    type="submit"
                                    class="btn"
                                    disabled=move || pendente.get()
                                >
                                    {move || if pendente.get() { "Salvando..." } else { "Salvar" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }
        })
    }
}
