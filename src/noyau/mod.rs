//! Noyau flottant RPN
//!
//! Organisation interne :
//! - jetons.rs   : jetons postfixés + relation de précédence
//! - erreur.rs   : erreurs (syntaxe / arithmétique)
//! - rpn.rs      : shunting-yard (infixe -> postfixe)
//! - eval.rs     : pile d’opérandes + pipeline complet
//! - format.rs   : affichage du résultat (point décimal fixe)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurEvaluation, GenreErreur};
pub use eval::{eval_avec_demarche, eval_expression, DemarcheNoyau};
pub use format::format_resultat;
