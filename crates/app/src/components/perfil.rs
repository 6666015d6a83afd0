use data::forms::{ErrosFormulario, PerfilForm, SenhaForm};
use data::usuario::UsuarioUpdateInput;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::formulario::{AlertaErro, ErroCampo};
use crate::sessao::{perfil_do_usuario, usa_sessao};
use crate::toast::usa_toasts;

/// Edição do próprio cadastro, em duas abas: dados pessoais e troca de
/// senha. A senha atual é exigida no formulário mas a mutação só envia
/// a nova, que é o que o contrato aceita.
#[allow(non_snake_case)]
#[component]
pub fn PerfilModal(aberto: RwSignal<bool>) -> impl IntoView {
    let sessao = usa_sessao();
    let toasts = usa_toasts();

    let aba_senha = RwSignal::new(false);
    let nome = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let senha_atual = RwSignal::new(String::new());
    let nova_senha = RwSignal::new(String::new());
    let confirmar_senha = RwSignal::new(String::new());
    let erros = RwSignal::new(ErrosFormulario::new());
    let falha = RwSignal::new(None::<String>);
    let pendente = RwSignal::new(false);

    // Preenche com o perfil corrente a cada abertura.
    Effect::new(move |_| {
        if aberto.get() {
            let perfil = sessao.perfil();
            nome.set(
                perfil
                    .as_ref()
                    .and_then(|p| p.nome.clone())
                    .unwrap_or_default(),
            );
            email.set(perfil.map(|p| p.email).unwrap_or_default());
            senha_atual.set(String::new());
            nova_senha.set(String::new());
            confirmar_senha.set(String::new());
            erros.set(ErrosFormulario::new());
            falha.set(None);
            aba_senha.set(false);
        }
    });

    let salva_dados = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = PerfilForm {
            nome: nome.get_untracked(),
            email: email.get_untracked(),
        };
        let validacao = form.valida();
        if !validacao.is_empty() {
            erros.set(validacao);
            return;
        }
        erros.set(ErrosFormulario::new());
        pendente.set(true);
        spawn_local(async move {
            let corpo = UsuarioUpdateInput {
                nome: Some(form.nome.trim().to_string()),
                email: Some(form.email.trim().to_string()),
                ..Default::default()
            };
            match sessao.gateway().atualizar_perfil(&corpo).await {
                Ok(usuario) => {
                    sessao.define_perfil(perfil_do_usuario(&usuario));
                    toasts.sucesso("Perfil atualizado com sucesso!");
                    falha.set(None);
                    aberto.set(false);
                }
                Err(erro) => {
                    toasts.erro(erro.mensagem());
                    falha.set(Some(erro.mensagem().to_string()));
                }
            }
            pendente.set(false);
        });
    };

    let salva_senha = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = SenhaForm {
            senha_atual: senha_atual.get_untracked(),
            nova_senha: nova_senha.get_untracked(),
            confirmar_senha: confirmar_senha.get_untracked(),
        };
        let validacao = form.valida();
        if !validacao.is_empty() {
            erros.set(validacao);
            return;
        }
        erros.set(ErrosFormulario::new());
        pendente.set(true);
        spawn_local(async move {
            let corpo = UsuarioUpdateInput {
                password: Some(form.nova_senha.clone()),
                ..Default::default()
            };
            match sessao.gateway().atualizar_perfil(&corpo).await {
                Ok(_) => {
                    toasts.sucesso("Senha alterada com sucesso!");
                    senha_atual.set(String::new());
                    nova_senha.set(String::new());
                    confirmar_senha.set(String::new());
                    falha.set(None);
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
            view! {
                <div class="modal">
                    <div class="modal-box">
                        <h3>"Editar Perfil"</h3>
                        <p class="text-muted">
                            "Atualize suas informações pessoais ou altere sua senha."
                        </p>
                        <div class="tabs">
                            <button
                                class=move || {
                                    if aba_senha.get() { "tab" } else { "tab tab-active" }
                                }
                                on:click=move |_| aba_senha.set(false)
                            >
                                "Dados"
                            </button>
                            <button
                                class=move || {
                                    if aba_senha.get() { "tab tab-active" } else { "tab" }
                                }
                                on:click=move |_| aba_senha.set(true)
                            >
                                "Senha"
                            </button>
                        </div>
                        <AlertaErro mensagem=falha/>
                        {move || {
                            if aba_senha.get() {
                                view! {
                                    <form on:submit=salva_senha>
                                        <div class="form-control">
                                            <label class="label">"Senha atual"</label>
                                            <input
                                                class="input"
                                                type="password"
                                                prop:value=move || senha_atual.get()
                                                on:input=move |ev| {
                                                    senha_atual.set(event_target_value(&ev))
                                                }
                                            />
                                            <ErroCampo erros=erros campo="senha_atual"/>
                                        </div>
                                        <div class="form-control">
                                            <label class="label">"Nova senha"</label>
                                            <input
                                                class="input"
                                                type="password"
                                                prop:value=move || nova_senha.get()
                                                on:input=move |ev| {
                                                    nova_senha.set(event_target_value(&ev))
                                                }
                                            />
                                            <ErroCampo erros=erros campo="nova_senha"/>
                                        </div>
                                        <div class="form-control">
                                            <label class="label">"Confirmar nova senha"</label>
                                            <input
                                                class="input"
                                                type="password"
                                                prop:value=move || confirmar_senha.get()
                                                on:input=move |ev| {
                                                    confirmar_senha.set(event_target_value(&ev))
                                                }
                                            />
                                            <ErroCampo erros=erros campo="confirmar_senha"/>
                                        </div>
                                        <div class="modal-action">
                                            <button
                                                type="button"
                                                class="btn btn-outline"
                                                on:click=move |_| aberto.set(false)
                                            >
                                                "Fechar"
                                            </button>
                                            <button
                                                type="submit"
                                                class="btn"
                                                disabled=move || pendente.get()
                                            >
                                                {move || {
                                                    if pendente.get() {
                                                        "Alterando..."
                                                    } else {
                                                        "Alterar Senha"
                                                    }
                                                }}
                                            </button>
                                        </div>
                                    </form>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <form on:submit=salva_dados>
                                        <div class="form-control">
                                            <label class="label">"Nome"</label>
                                            <input
                                                class="input"
                                                type="text"
                                                prop:value=move || nome.get()
                                                on:input=move |ev| {
                                                    nome.set(event_target_value(&ev))
                                                }
                                            />
                                            <ErroCampo erros=erros campo="nome"/>
                                        </div>
                                        <div class="form-control">
                                            <label class="label">"Email"</label>
                                            <input
                                                class="input"
                                                type="email"
                                                prop:value=move || email.get()
                                                on:input=move |ev| {
                                                    email.set(event_target_value(&ev))
                                                }
                                            />
                                            <ErroCampo erros=erros campo="email"/>
                                        </div>
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
                                                {move || {
                                                    if pendente.get() { "Salvando..." } else { "Salvar" }
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
        })
    }
}
