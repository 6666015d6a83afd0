use data::forms::ErrosFormulario;
use leptos::prelude::*;

/// Mensagem de validação de um campo, renderizada logo abaixo do input.
#[allow(non_snake_case)]
#[component]
pub fn ErroCampo(erros: RwSignal<ErrosFormulario>, campo: &'static str) -> impl IntoView {
    move || {
        erros
            .with(|erros| erros.get(campo).cloned())
            .map(|mensagem| view! { <span class="label-error">{mensagem}</span> })
    }
}

/// Falha de submissão exibida no topo do formulário.
#[allow(non_snake_case)]
#[component]
pub fn AlertaErro(mensagem: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        mensagem
            .get()
            .map(|texto| view! { <div class="alert alert-error">{texto}</div> })
    }
}
