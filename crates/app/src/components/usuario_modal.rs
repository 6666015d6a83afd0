use data::forms::{ErrosFormulario, UsuarioForm};
use data::usuario::{Usuario, UsuarioUpdateInput};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::formulario::{AlertaErro, ErroCampo};
use crate::sessao::usa_sessao;
use crate::toast::usa_toasts;

/// Edição administrativa de um usuário. O username é imutável; a senha
/// só entra no patch quando preenchida.
#[allow(non_snake_case)]
#[component]
pub fn EditUsuarioModal(
    aberto: RwSignal<bool>,
    usuario: RwSignal<Option<Usuario>>,
    ao_salvar: Callback<()>,
) -> impl IntoView {
    let sessao = usa_sessao();
    let toasts = usa_toasts();

    let nome = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let confirmar_senha = RwSignal::new(String::new());
    let admin = RwSignal::new(false);
    let erros = RwSignal::new(ErrosFormulario::new());
    let falha = RwSignal::new(None::<String>);
    let pendente = RwSignal::new(false);

    Effect::new(move |_| {
        if aberto.get() {
            if let Some(atual) = usuario.get_untracked() {
                nome.set(atual.nome.unwrap_or_default());
                email.set(atual.email);
                admin.set(atual.admin);
            }
            senha.set(String::new());
            confirmar_senha.set(String::new());
            erros.set(ErrosFormulario::new());
            falha.set(None);
        }
    });

    let ao_submeter = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some((usuario_id, username)) =
            usuario.with_untracked(|atual| atual.as_ref().map(|u| (u.id, u.username.clone())))
        else {
            return;
        };
        let form = UsuarioForm {
            nome: nome.get_untracked(),
            username,
            email: email.get_untracked(),
            senha: senha.get_untracked(),
            confirmar_senha: confirmar_senha.get_untracked(),
            admin: admin.get_untracked(),
            exigir_senha: false,
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
                password: (!form.senha.is_empty()).then(|| form.senha.clone()),
                admin: Some(form.admin),
            };
            match sessao
                .gateway()
                .atualizar_usuario_admin(usuario_id, &corpo)
                .await
            {
                Ok(_) => {
                    toasts.sucesso("Usuário atualizado com sucesso!");
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
            let username = usuario
                .with_untracked(|atual| atual.as_ref().map(|u| u.username.clone()))
                .unwrap_or_default();
            view! {
                <div class="modal">
                    <div class="modal-box">
                        <h3>"Editar Usuário"</h3>
                        <p class="text-muted">{format!("Usuário: {username}")}</p>
                        <AlertaErro mensagem=falha/>
                        <form on:submit=ao_submeter>
                            <div class="form-control">
                                <label class="label">"Nome *"</label>
                                <input
                                    class="input"
                                    type="text"
                                    prop:value=move || nome.get()
                                    on:input=move |ev| nome.set(event_target_value(&ev))
                                />
                                <ErroCampo erros=erros campo="nome"/>
                            </div>
                            <div class="form-control">
                                <label class="label">"Email *"</label>
                                <input
                                    class="input"
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <ErroCampo erros=erros campo="email"/>
                            </div>
                            <div class="form-control">
                                <label class="label">"Nova senha (opcional)"</label>
                                <input
                                    class="input"
                                    type="password"
                                    prop:value=move || senha.get()
                                    on:input=move |ev| senha.set(event_target_value(&ev))
                                />
                                <ErroCampo erros=erros campo="senha"/>
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
                            <div class="form-control">
                                <label class="label">
                                    <input
                                        class="checkbox"
                                        type="checkbox"
                                        prop:checked=move || admin.get()
                                        on:change=move |ev| admin.set(event_target_checked(&ev))
                                    />
                                    " Administrador"
                                </label>
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
