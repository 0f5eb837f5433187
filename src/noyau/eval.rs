//! Noyau — évaluation (pipeline réel)
//!
//! texte infixe -> postfixe (rpn.rs) -> pile d’opérandes -> f64
//!
//! Tout l’état intermédiaire (pile, jetons) est local à l’appel : plusieurs
//! évaluations peuvent tourner en parallèle sans coordination.

use num_traits::Zero;

use super::erreur::ErreurEvaluation;
use super::jetons::{format_jetons, Jeton, Operateur};
use super::rpn::infixe_vers_postfixe;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    /// Suite postfixée, ex: "1 2 3 * +".
    pub postfixe: String,
    /// Profondeur maximale atteinte par la pile d’opérandes.
    pub profondeur_max: usize,
}

/// API publique : évalue une expression infixe.
pub fn eval_expression(expression: &str) -> Result<f64, ErreurEvaluation> {
    let postfixe = infixe_vers_postfixe(expression)?;
    evaluer_postfixe(&postfixe)
}

/// Comme `eval_expression`, avec la démarche (postfixe + profondeur de pile).
pub fn eval_avec_demarche(expression: &str) -> Result<(f64, DemarcheNoyau), ErreurEvaluation> {
    let postfixe = infixe_vers_postfixe(expression)?;
    let (valeur, profondeur_max) = reduire(&postfixe)?;
    let d = DemarcheNoyau {
        postfixe: format_jetons(&postfixe),
        profondeur_max,
    };
    Ok((valeur, d))
}

/// Réduit une suite postfixée à une seule valeur.
pub fn evaluer_postfixe(jetons: &[Jeton]) -> Result<f64, ErreurEvaluation> {
    reduire(jetons).map(|(valeur, _)| valeur)
}

fn reduire(jetons: &[Jeton]) -> Result<(f64, usize), ErreurEvaluation> {
    let mut pile: Vec<f64> = Vec::with_capacity(jetons.len());
    let mut profondeur_max = 0usize;

    for jeton in jetons {
        match jeton {
            Jeton::Nombre(texte) => pile.push(lire_nombre(texte)?),

            Jeton::Operateur(op) => {
                // chaque opérateur exige 2 opérandes
                if pile.len() < 2 {
                    return Err(ErreurEvaluation::OperandeManquant);
                }
                let droite = pile.pop().ok_or(ErreurEvaluation::OperandeManquant)?;
                let gauche = pile.pop().ok_or(ErreurEvaluation::OperandeManquant)?;
                pile.push(appliquer(*op, gauche, droite)?);
            }
        }
        profondeur_max = profondeur_max.max(pile.len());
    }

    match pile.len() {
        1 => Ok((pile[0], profondeur_max)),
        0 => Err(ErreurEvaluation::OperandeManquant),
        _ => Err(ErreurEvaluation::OperateurManquant),
    }
}

/// Lecture décimale à point fixe (indépendante de la locale).
///
/// Le texte ne contient que chiffres et points (garanti par le balayage),
/// donc pas d’exposant ni de "inf"/"NaN" possibles ici.
fn lire_nombre(texte: &str) -> Result<f64, ErreurEvaluation> {
    texte
        .parse::<f64>()
        .map_err(|_| ErreurEvaluation::NombreMalForme {
            texte: texte.to_string(),
        })
}

fn appliquer(op: Operateur, gauche: f64, droite: f64) -> Result<f64, ErreurEvaluation> {
    let v = match op {
        Operateur::Plus => gauche + droite,
        Operateur::Moins => gauche - droite,
        Operateur::Fois => gauche * droite,
        Operateur::Division => {
            // égalité exacte, pas d’epsilon (-0.0 compris)
            if droite.is_zero() {
                return Err(ErreurEvaluation::DivisionParZero);
            }
            gauche / droite
        }
        Operateur::Puissance => gauche.powf(droite),
        // reste tronqué : signe du dividende
        Operateur::Modulo => gauche % droite,
    };
    Ok(v)
}
