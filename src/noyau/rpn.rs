// src/noyau/rpn.rs
//
// Shunting-yard : infixe (texte) -> suite postfixée de Jeton.
//
// Règles:
// - une suite maximale de chiffres/points devient UN Jeton::Nombre (texte brut)
// - à chaque symbole, UNE seule comparaison avec le sommet de pile (pas de boucle)
// - ')' dépile jusqu’à la '(' correspondante
// - tout autre caractère est ignoré (le filtrage est fait par l’appelant)
//
// NOTE:
// - Hors parenthèses, la comparaison unique ne ressort que le sommet : "1-2*3+4"
//   laisse '-' sous '+' et donne "1 2 3 * 4 + -". Comportement conservé tel quel.

use super::erreur::ErreurEvaluation;
use super::jetons::{est_chiffre, format_jetons, precede, Jeton, Symbole};

/// Convertit une expression infixe en suite postfixée (notation polonaise inversée).
///
/// Exemple:
///   infixe:   "1+2*3"
///   postfixe: [Nombre("1"), Nombre("2"), Nombre("3"), *, +]
pub fn infixe_vers_postfixe(infixe: &str) -> Result<Vec<Jeton>, ErreurEvaluation> {
    let mut sortie: Vec<Jeton> = Vec::new();
    let mut pile: Vec<Symbole> = Vec::new();

    let mut chars = infixe.char_indices().peekable();

    while let Some((debut, c)) = chars.next() {
        // nombre : on avale toute la suite de chiffres/points
        if est_chiffre(c) {
            let mut fin = debut + c.len_utf8();
            while let Some(&(i, suivant)) = chars.peek() {
                if !est_chiffre(suivant) {
                    break;
                }
                fin = i + suivant.len_utf8();
                chars.next();
            }
            sortie.push(Jeton::Nombre(infixe[debut..fin].to_string()));
            continue;
        }

        if let Some(entrant) = Symbole::depuis_char(c) {
            traiter_symbole(entrant, &mut pile, &mut sortie)?;
        }
    }

    // vide la pile : une '(' restante n’a jamais été fermée
    while let Some(s) = pile.pop() {
        match s {
            Symbole::Op(op) => sortie.push(Jeton::Operateur(op)),
            Symbole::ParOuvrante | Symbole::ParFermante => {
                return Err(ErreurEvaluation::ParentheseDroiteManquante)
            }
        }
    }

    log::debug!("postfixe de {infixe:?} : {}", format_jetons(&sortie));
    Ok(sortie)
}

fn traiter_symbole(
    entrant: Symbole,
    pile: &mut Vec<Symbole>,
    sortie: &mut Vec<Jeton>,
) -> Result<(), ErreurEvaluation> {
    // comparaison unique avec le sommet ; une '(' sort de la pile sans être émise
    if let Some(&sommet) = pile.last() {
        if precede(sommet, entrant) {
            if let Symbole::Op(op) = sommet {
                sortie.push(Jeton::Operateur(op));
            }
            pile.pop();
        }
    }

    if entrant != Symbole::ParFermante {
        pile.push(entrant);
        return Ok(());
    }

    // ')' : dépile jusqu’à '('
    loop {
        match pile.pop() {
            Some(Symbole::ParOuvrante) => return Ok(()),
            Some(Symbole::Op(op)) => sortie.push(Jeton::Operateur(op)),
            Some(Symbole::ParFermante) | None => {
                return Err(ErreurEvaluation::ParentheseGaucheManquante)
            }
        }
    }
}
