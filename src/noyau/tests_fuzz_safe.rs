//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le noyau sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants : parenthèses, opérande manquant, division par zéro,
//!   chaînes à un seul niveau de précédence = pli gauche

use std::time::{Duration, Instant};

use super::erreur::ErreurEvaluation;
use super::eval_expression;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn choisir<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.pick(items.len() as u32) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const OPERATEURS: [char; 6] = ['+', '-', '*', '/', '%', '^'];
const ALPHABET: [char; 17] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', '%', '^',
];

fn gen_nombre(rng: &mut Rng) -> String {
    // entiers et décimaux simples, zéro inclus (division par zéro voulue)
    let entier = rng.pick(10);
    match rng.pick(3) {
        0 => format!("{entier}.{}", rng.pick(10)),
        _ => format!("{entier}"),
    }
}

/// Binaire "g op d" ; un opérande composé est toujours entre parenthèses.
fn gen_binaire(rng: &mut Rng, depth: usize) -> String {
    let g = gen_operande(rng, depth);
    let op = rng.choisir(&OPERATEURS);
    let d = gen_operande(rng, depth);
    format!("{g}{op}{d}")
}

fn gen_operande(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 || rng.pick(3) == 0 {
        gen_nombre(rng)
    } else {
        format!("({})", gen_binaire(rng, depth - 1))
    }
}

fn gen_bruit(rng: &mut Rng) -> String {
    let n = rng.pick(12) as usize;
    (0..n)
        .map(|_| {
            if rng.pick(6) == 0 {
                rng.choisir(&['(', ')'])
            } else {
                rng.choisir(&ALPHABET)
            }
        })
        .collect()
}

fn meme_resultat(a: &Result<f64, ErreurEvaluation>, b: &Result<f64, ErreurEvaluation>) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x.to_bits() == y.to_bits(),
        (Err(x), Err(y)) => x == y,
        _ => false,
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bruit_sans_faute_et_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..2_000 {
        budget(t0, max);

        let expr = gen_bruit(&mut rng);
        let a = eval_expression(&expr);
        let b = eval_expression(&expr);
        assert!(meme_resultat(&a, &b), "non déterministe: expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let expr = gen_binaire(&mut rng, 4);
        match eval_expression(&expr) {
            Ok(_) => seen_ok += 1,
            Err(ErreurEvaluation::DivisionParZero) => seen_div0 += 1,
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue");
}

#[test]
fn fuzz_safe_parentheses_desequilibrees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..300 {
        budget(t0, max);

        let x = if rng.pick(4) == 0 {
            gen_nombre(&mut rng)
        } else {
            gen_binaire(&mut rng, 3)
        };

        let droite_en_trop = format!("{x})");
        assert_eq!(
            eval_expression(&droite_en_trop),
            Err(ErreurEvaluation::ParentheseGaucheManquante),
            "expr={droite_en_trop:?}"
        );

        let gauche_en_trop = format!("({x}");
        assert_eq!(
            eval_expression(&gauche_en_trop),
            Err(ErreurEvaluation::ParentheseDroiteManquante),
            "expr={gauche_en_trop:?}"
        );
    }
}

#[test]
fn fuzz_safe_deux_operateurs_consecutifs() {
    let mut rng = Rng::new(0xFACADE_u64);

    for _ in 0..300 {
        let a = gen_nombre(&mut rng);
        let op1 = rng.choisir(&OPERATEURS);
        let op2 = rng.choisir(&OPERATEURS);
        // opérande droit non nul : pas de division par zéro avant le contrôle
        let b = rng.pick(9) + 1;

        let expr = format!("{a}{op1}{op2}{b}");
        assert_eq!(
            eval_expression(&expr),
            Err(ErreurEvaluation::OperandeManquant),
            "expr={expr:?}"
        );
    }
}

#[test]
fn fuzz_safe_division_par_zero() {
    let mut rng = Rng::new(0xD1F0_u64);

    for _ in 0..300 {
        let x = gen_binaire(&mut rng, 3);
        let zero = rng.choisir(&["0", "0.0", "00", "0.000"]);

        let expr = format!("({x})/{zero}");
        assert_eq!(
            eval_expression(&expr),
            Err(ErreurEvaluation::DivisionParZero),
            "expr={expr:?}"
        );
    }
}

#[test]
fn fuzz_safe_un_seul_niveau_egal_pli_gauche() {
    let mut rng = Rng::new(0xA550C_u64);

    let niveaux: [&[char]; 3] = [&['+', '-'], &['*', '/', '%'], &['^']];

    for _ in 0..400 {
        let ops = rng.choisir(&niveaux);
        // ^ : chaîne courte et petites bases (pas d’overflow inutile)
        let (longueur, borne) = if ops[0] == '^' { (3, 3) } else { (8, 9) };

        let premier = (rng.pick(borne) + 1) as f64;
        let mut expr = format!("{premier}");
        let mut attendu = premier;

        for _ in 0..rng.pick(longueur) + 1 {
            let op = rng.choisir(ops);
            let n = (rng.pick(borne) + 1) as f64;
            expr.push(op);
            expr.push_str(&format!("{n}"));
            attendu = match op {
                '+' => attendu + n,
                '-' => attendu - n,
                '*' => attendu * n,
                '/' => attendu / n,
                '%' => attendu % n,
                _ => attendu.powf(n),
            };
        }

        let v = eval_expression(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert_eq!(v.to_bits(), attendu.to_bits(), "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_appels_concurrents() {
    let cas: [(&str, Result<f64, ErreurEvaluation>); 5] = [
        ("1+2*3", Ok(7.0)),
        ("4*2^3", Ok(32.0)),
        ("2^3^2", Ok(64.0)),
        ("((1+2)*43)/0", Err(ErreurEvaluation::DivisionParZero)),
        ("((1+2)", Err(ErreurEvaluation::ParentheseDroiteManquante)),
    ];

    std::thread::scope(|s| {
        for decalage in 0..8 {
            let cas = &cas;
            s.spawn(move || {
                for i in 0..500 {
                    let (expr, attendu) = &cas[(i + decalage) % cas.len()];
                    assert_eq!(&eval_expression(expr), attendu, "expr={expr:?}");
                }
            });
        }
    });
}
