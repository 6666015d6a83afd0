//! Paginação local das listagens. O backend entrega um lote superior
//! limitado (primeiros 1000) e toda a navegação de páginas acontece aqui.

pub const TAMANHOS_DE_PAGINA: [usize; 4] = [10, 25, 50, 100];
pub const TAMANHO_PADRAO: usize = 25;

/// Quantos botões de página ficam visíveis antes de comprimir com
/// reticências.
const JANELA_VISIVEL: usize = 5;

pub fn total_paginas(total_itens: usize, tamanho: usize) -> usize {
    if tamanho == 0 {
        return 0;
    }
    total_itens.div_ceil(tamanho)
}

/// Mantém a página atual dentro de `1..=total`, voltando para a última
/// página quando a lista encolhe.
pub fn ajusta_pagina(pagina: usize, total_paginas: usize) -> usize {
    pagina.max(1).min(total_paginas.max(1))
}

/// Índices `[inicio, fim)` da página, base zero.
pub fn intervalo_pagina(total_itens: usize, pagina: usize, tamanho: usize) -> (usize, usize) {
    let pagina = ajusta_pagina(pagina, total_paginas(total_itens, tamanho));
    let inicio = (pagina - 1).saturating_mul(tamanho).min(total_itens);
    let fim = inicio.saturating_add(tamanho).min(total_itens);
    (inicio, fim)
}

pub fn fatia_pagina<T: Clone>(itens: &[T], pagina: usize, tamanho: usize) -> Vec<T> {
    let (inicio, fim) = intervalo_pagina(itens.len(), pagina, tamanho);
    itens[inicio..fim].to_vec()
}

/// "Mostrando X a Y de Z itens", com X/Y em base um.
pub fn resumo_exibicao(total_itens: usize, pagina: usize, tamanho: usize) -> String {
    if total_itens == 0 {
        return "Mostrando 0 de 0 itens".into();
    }
    let (inicio, fim) = intervalo_pagina(total_itens, pagina, tamanho);
    format!("Mostrando {} a {} de {} itens", inicio + 1, fim, total_itens)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPaginacao {
    Pagina(usize),
    Reticencias,
}

/// Botões de navegação: todas as páginas quando cabem na janela visível;
/// senão primeira página, vizinhança da atual e última página, com
/// reticências nos trechos comprimidos.
pub fn itens_paginacao(total_paginas: usize, atual: usize) -> Vec<ItemPaginacao> {
    use ItemPaginacao::*;

    if total_paginas <= JANELA_VISIVEL {
        return (1..=total_paginas).map(Pagina).collect();
    }

    let atual = ajusta_pagina(atual, total_paginas);
    let mut itens = vec![Pagina(1)];

    if atual > 3 {
        itens.push(Reticencias);
    }

    let de = atual.saturating_sub(1).max(2);
    let ate = (atual + 1).min(total_paginas - 1);
    for pagina in de..=ate {
        itens.push(Pagina(pagina));
    }

    if atual + 2 < total_paginas {
        itens.push(Reticencias);
    }

    itens.push(Pagina(total_paginas));
    itens
}

#[cfg(test)]
mod tests {
    use super::*;
    use ItemPaginacao::*;

    #[test]
    fn test_ajusta_pagina_nos_limites() {
        assert_eq!(ajusta_pagina(0, 4), 1);
        assert_eq!(ajusta_pagina(2, 4), 2);
        assert_eq!(ajusta_pagina(9, 4), 4);
        assert_eq!(ajusta_pagina(3, 0), 1);
    }

    #[test]
    fn test_itens_sem_compressao() {
        assert_eq!(
            itens_paginacao(4, 2),
            vec![Pagina(1), Pagina(2), Pagina(3), Pagina(4)]
        );
    }

    #[test]
    fn test_itens_comprimidos_no_meio() {
        assert_eq!(
            itens_paginacao(10, 5),
            vec![
                Pagina(1),
                Reticencias,
                Pagina(4),
                Pagina(5),
                Pagina(6),
                Reticencias,
                Pagina(10)
            ]
        );
    }

    #[test]
    fn test_itens_no_comeco_e_no_fim() {
        assert_eq!(
            itens_paginacao(10, 1),
            vec![Pagina(1), Pagina(2), Reticencias, Pagina(10)]
        );
        assert_eq!(
            itens_paginacao(10, 10),
            vec![Pagina(1), Reticencias, Pagina(9), Pagina(10)]
        );
        assert_eq!(
            itens_paginacao(10, 8),
            vec![
                Pagina(1),
                Reticencias,
                Pagina(7),
                Pagina(8),
                Pagina(9),
                Pagina(10)
            ]
        );
    }
}
