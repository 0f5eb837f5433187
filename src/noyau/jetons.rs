// src/noyau/jetons.rs
//
// Jetons postfixés + symboles de la pile d’opérateurs + relation de précédence.

/// Opérateurs binaires reconnus (arité 2, pas d’unaire).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Division,
    Modulo,
    Puissance, // ^
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Division => '/',
            Operateur::Modulo => '%',
            Operateur::Puissance => '^',
        }
    }
}

/// Jeton de la sortie postfixée.
///
/// Le nombre garde son texte brut : la validation du format (ex: "3.14.5")
/// est faite à l’évaluation, pas au balayage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    Nombre(String),
    Operateur(Operateur),
}

/// Symbole lu dans l’infixe hors chiffres : opérateur ou parenthèse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbole {
    Op(Operateur),
    ParOuvrante,
    ParFermante,
}

impl Symbole {
    /// Reconnaît `+ - * / % ^ ( )`. Tout autre caractère => None.
    pub fn depuis_char(c: char) -> Option<Symbole> {
        let s = match c {
            '+' => Symbole::Op(Operateur::Plus),
            '-' => Symbole::Op(Operateur::Moins),
            '*' => Symbole::Op(Operateur::Fois),
            '/' => Symbole::Op(Operateur::Division),
            '%' => Symbole::Op(Operateur::Modulo),
            '^' => Symbole::Op(Operateur::Puissance),
            '(' => Symbole::ParOuvrante,
            ')' => Symbole::ParFermante,
            _ => return None,
        };
        Some(s)
    }
}

/// Caractère faisant partie d’un nombre (chiffre ou point décimal).
pub fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Relation de précédence : `true` si le sommet de pile doit sortir
/// AVANT d’empiler le symbole entrant.
///
/// Conséquence : tout est associatif à gauche, `^` compris (2^3^2 = 64).
pub fn precede(sommet: Symbole, entrant: Symbole) -> bool {
    use Operateur::*;
    use Symbole::*;

    match (sommet, entrant) {
        // * / % ^ lient plus fort que + -
        (Op(Plus | Moins), Op(Fois | Division | Modulo | Puissance)) => false,
        // ^ lie plus fort que * / %
        (Op(Fois | Division | Modulo), Op(Puissance)) => false,
        // jamais de sortie à travers une '(' ouverte
        (ParOuvrante, e) if e != ParFermante => false,
        // une '(' entrante est toujours empilée
        (_, ParOuvrante) => false,
        _ => true,
    }
}

/// Format utilitaire (démarche) : suite postfixée en texte, ex: "1 2 3 * +".
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(jetons.len());
    for j in jetons {
        let s = match j {
            Jeton::Nombre(texte) => texte.clone(),
            Jeton::Operateur(op) => op.symbole().to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
