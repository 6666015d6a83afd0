use data::forms::{ErrosFormulario, LoginForm};
use data::usuario::Credenciais;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use tracing::{info, warn};

use crate::components::formulario::{AlertaErro, ErroCampo};
use crate::sessao::{perfil_do_usuario, usa_sessao};
use crate::toast::usa_toasts;

#[allow(non_snake_case)]
#[component]
pub fn LoginPage() -> impl IntoView {
    let sessao = usa_sessao();
    let toasts = usa_toasts();

    let username = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let erros = RwSignal::new(ErrosFormulario::new());
    let falha = RwSignal::new(None::<String>);
    let pendente = RwSignal::new(false);

    let ao_entrar = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            username: username.get_untracked(),
            senha: senha.get_untracked(),
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
            let credenciais = Credenciais {
                username: form.username.trim().to_string(),
                password: form.senha.clone(),
            };
            match sessao.gateway().login(&credenciais).await {
                Ok(resposta) => {
                    info!("login aceito para {}", credenciais.username);
                    sessao.entrar(resposta.access_token);
                    match sessao.gateway().meu_perfil().await {
                        Ok(usuario) => sessao.define_perfil(perfil_do_usuario(&usuario)),
                        Err(erro) => warn!("perfil após login: {}", erro.mensagem()),
                    }
                    pendente.set(false);
                    navigate("/", Default::default());
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
                    <h1 class="text-xl" style:text-align="center">"Sistema"</h1>
                    <p class="text-muted" style:text-align="center">
                        "Reserva de Salas de Reunião"
                    </p>
                    <h2 class="card-title">"Login"</h2>
                    <p class="text-muted">"Entre com suas credenciais para acessar o sistema"</p>
                    <AlertaErro mensagem=falha/>
                    <form on:submit=ao_entrar>
                        <div class="form-control">
                            <label class="label">"Usuário"</label>
                            <input
                                class="input"
                                type="text"
                                placeholder="Digite seu usuário"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                            <ErroCampo erros=erros campo="username"/>
                        </div>
                        <div class="form-control">
                            <label class="label">"Senha"</label>
                            <input
                                class="input"
                                type="password"
                                placeholder="Digite sua senha"
                                prop:value=move || senha.get()
                                on:input=move |ev| senha.set(event_target_value(&ev))
                            />
                            <ErroCampo erros=erros campo="senha"/>
                        </div>
                        <button
                            type="submit"
                            class="btn"
                            style:width="100%"
                            disabled=move || pendente.get()
                        >
                            {move || if pendente.get() { "Entrando..." } else { "Entrar" }}
                        </button>
                    </form>
                    <p class="text-muted" style:margin-top="1rem">
                        "Não tem uma conta? " <a href="/registro">"Criar conta"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
