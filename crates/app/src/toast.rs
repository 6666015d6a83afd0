use std::time::Duration;

use leptos::prelude::*;

const DURACAO_TOAST: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TomToast {
    Sucesso,
    Erro,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub mensagem: String,
    pub tom: TomToast,
}

/// Fila de avisos transientes, exposta por contexto. Cada aviso some
/// sozinho depois de alguns segundos, ou antes com um clique.
#[derive(Clone, Copy, Default)]
pub struct Toasts {
    itens: RwSignal<Vec<Toast>>,
    proximo: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sucesso(&self, mensagem: impl Into<String>) {
        self.exibe(mensagem.into(), TomToast::Sucesso);
    }

    pub fn erro(&self, mensagem: impl Into<String>) {
        self.exibe(mensagem.into(), TomToast::Erro);
    }

    fn exibe(&self, mensagem: String, tom: TomToast) {
        let id = self.proximo.get_value();
        self.proximo.set_value(id + 1);

        let itens = self.itens;
        itens.update(|fila| fila.push(Toast { id, mensagem, tom }));
        set_timeout(
            move || itens.update(|fila| fila.retain(|toast| toast.id != id)),
            DURACAO_TOAST,
        );
    }

    pub fn fecha(&self, id: u64) {
        self.itens.update(|fila| fila.retain(|toast| toast.id != id));
    }
}

pub fn usa_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[allow(non_snake_case)]
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = usa_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.itens.get()
                key=|toast| toast.id
                children=move |toast| {
                    let classe = match toast.tom {
                        TomToast::Sucesso => "toast-item toast-success",
                        TomToast::Erro => "toast-item toast-error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=classe on:click=move |_| toasts.fecha(id)>
                            {toast.mensagem.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
