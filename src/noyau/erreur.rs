// src/noyau/erreur.rs
//
// Erreurs du noyau. Le texte `#[error]` est le message rendu tel quel à l’appelant.

use thiserror::Error;

/// Catégorie d’une erreur (syntaxe vs arithmétique).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreErreur {
    /// Structure invalide : parenthèses, nombre mal formé, opérande absent.
    Syntaxe,
    /// Expression bien formée mais indéfinie numériquement.
    Arithmetique,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErreurEvaluation {
    #[error("Left parenthesis is missing.")]
    ParentheseGaucheManquante,

    #[error("Right parenthesis is missing.")]
    ParentheseDroiteManquante,

    #[error("Expression contains number in wrong format.")]
    NombreMalForme { texte: String },

    #[error("Operand is missing.")]
    OperandeManquant,

    /// Plusieurs valeurs restent sur la pile (ex: "1(2+3)").
    #[error("Operator is missing.")]
    OperateurManquant,

    #[error("Division by zero.")]
    DivisionParZero,
}

impl ErreurEvaluation {
    pub fn genre(&self) -> GenreErreur {
        match self {
            ErreurEvaluation::DivisionParZero => GenreErreur::Arithmetique,
            _ => GenreErreur::Syntaxe,
        }
    }
}
