use data::paging::*;

#[test]
fn test_total_de_paginas_arredonda_para_cima() {
    assert_eq!(total_paginas(0, 25), 0);
    assert_eq!(total_paginas(25, 25), 1);
    assert_eq!(total_paginas(26, 25), 2);
    assert_eq!(total_paginas(37, 25), 2);
    assert_eq!(total_paginas(100, 25), 4);
}

#[test]
fn test_fatia_de_37_itens_em_paginas_de_25() {
    let itens: Vec<usize> = (1..=37).collect();

    let primeira = fatia_pagina(&itens, 1, 25);
    assert_eq!(primeira.len(), 25);
    assert_eq!(primeira.first(), Some(&1));
    assert_eq!(primeira.last(), Some(&25));

    let segunda = fatia_pagina(&itens, 2, 25);
    assert_eq!(segunda.len(), 12);
    assert_eq!(segunda.first(), Some(&26));
    assert_eq!(segunda.last(), Some(&37));
}

#[test]
fn test_resumo_de_exibicao() {
    assert_eq!(resumo_exibicao(37, 1, 25), "Mostrando 1 a 25 de 37 itens");
    assert_eq!(resumo_exibicao(37, 2, 25), "Mostrando 26 a 37 de 37 itens");
    assert_eq!(resumo_exibicao(0, 1, 25), "Mostrando 0 de 0 itens");
    assert_eq!(resumo_exibicao(5, 1, 10), "Mostrando 1 a 5 de 5 itens");
}

#[test]
fn test_pagina_fora_do_intervalo_volta_para_a_ultima() {
    let itens: Vec<usize> = (1..=30).collect();
    let fatia = fatia_pagina(&itens, 9, 25);
    assert_eq!(fatia.first(), Some(&26));
    assert_eq!(fatia.len(), 5);
}

#[test]
fn test_intervalo_pagina_base_zero() {
    assert_eq!(intervalo_pagina(37, 1, 25), (0, 25));
    assert_eq!(intervalo_pagina(37, 2, 25), (25, 37));
    assert_eq!(intervalo_pagina(0, 1, 25), (0, 0));
}

#[test]
fn test_tamanhos_disponiveis() {
    assert_eq!(TAMANHOS_DE_PAGINA, [10, 25, 50, 100]);
    assert_eq!(TAMANHO_PADRAO, 25);
}

#[test]
fn test_navegacao_com_uma_pagina_so() {
    use ItemPaginacao::*;
    assert_eq!(itens_paginacao(1, 1), vec![Pagina(1)]);
    assert_eq!(itens_paginacao(0, 1), vec![]);
}
