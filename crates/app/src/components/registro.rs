use data::forms::{ErrosFormulario, RegistroForm};
use data::usuario::UsuarioInput;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use tracing::info;

use crate::components::formulario::{AlertaErro, ErroCampo};
use crate::sessao::usa_sessao;
use crate::toast::usa_toasts;

#[allow(non_snake_case)]
#[component]
pub fn RegistroPage() -> impl IntoView {
    let sessao = usa_sessao();
    let toasts = usa_toasts();

    let nome = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let confirmar_senha = RwSignal::new(String::new());
    let erros = RwSignal::new(ErrosFormulario::new());
    let falha = RwSignal::new(None::<String>);
    let pendente = RwSignal::new(false);

    let ao_registrar = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = RegistroForm {
            nome: nome.get_untracked(),
            username: username.get_untracked(),
            email: email.get_untracked(),
            senha: senha.get_untracked(),
            confirmar_senha: confirmar_senha.get_untracked(),
        };
        let validacao = form.valida();
        if !validacao.is_empty() {
            erros.set(validacao);
            return;
        }
        erros.set(ErrosFormulario::new());
        falha.set(None);
        pendente.set(true);

        spawn_local(async move {
            let navigate = use_navigate();
            let corpo = UsuarioInput {
                nome: Some(form.nome.trim().to_string()),
                username: form.username.trim().to_string(),
                email: form.email.trim().to_string(),
                password: form.senha.clone(),
                admin: None,
            };
            match sessao.gateway().criar_usuario(&corpo).await {
                Ok(usuario) => {
                    info!("conta criada para {}", usuario.username);
                    toasts.sucesso("Conta criada com sucesso! Faça login para continuar.");
                    pendente.set(false);
                    navigate("/login", Default::default());
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
        {move || sessao.autenticado().then(|| view! { <Redirect path="/"/> })}
        <div class="hero">
            <div class="card auth-card">
                <div class="card-body">
                    <h2 class="card-title">"Criar Conta"</h2>
                    <p class="text-muted">"Preencha os dados para criar sua conta"</p>
                    <AlertaErro mensagem=falha/>
                    <form on:submit=ao_registrar>
                        <div class="form-control">
                            <label class="label">"Nome"</label>
                            <input
                                class="input"
                                type="text"
                                placeholder="Seu nome completo"
                                prop:value=move || nome.get()
                                on:input=move |ev| nome.set(event_target_value(&ev))
                            />
                            <ErroCampo erros=erros campo="nome"/>
                        </div>
                        <div class="form-control">
                            <label class="label">"Usuário"</label>
                            <input
                                class="input"
                                type="text"
                                placeholder="Nome de usuário para login"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                            <ErroCampo erros=erros campo="username"/>
                        </div>
                        <div class="form-control">
                            <label class="label">"Email"</label>
                            <input
                                class="input"
                                type="email"
                                placeholder="voce@empresa.com.br"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <ErroCampo erros=erros campo="email"/>
                        </div>
                        <div class="form-control">
                            <label class="label">"Senha"</label>
                            <input
                                class="input"
                                type="password"
                                placeholder="Mínimo de 6 caracteres"
                                prop:value=move || senha.get()
                                on:input=move |ev| senha.set(event_target_value(&ev))
                            />
                            <ErroCampo erros=erros campo="senha"/>
                        </div>
                        <div class="form-control">
                            <label class="label">"Confirmar Senha"</label>
                            <input
                                class="input"
                                type="password"
                                placeholder="Repita a senha"
                                prop:value=move || confirmar_senha.get()
                                on:input=move |ev| confirmar_senha.set(event_target_value(&ev))
                            />
                            <ErroCampo erros=erros campo="confirmar_senha"/>
                        </div>
                        <button
                            type="submit"
                            class="btn"
                            style:width="100%"
                            disabled=move || pendente.get()
                        >
                            {move || if pendente.get() { "Criando..." } else { "Criar Conta" }}
                        </button>
                    </form>
                    <p class="text-muted" style:margin-top="1rem">
                        "Já tem uma conta? " <a href="/login">"Entrar"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
