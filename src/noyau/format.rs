// src/noyau/format.rs
//
// Affichage du résultat : point décimal fixe, 15 chiffres significatifs,
// zéros finaux retirés, notation scientifique hors de [1e-5, 1e15).

/// Chiffres significatifs affichés.
const CHIFFRES_SIGNIFICATIFS: usize = 15;

/// Bornes (exposant décimal) de la notation “plate”.
const EXPOSANT_MIN_PLAT: i32 = -5;
const EXPOSANT_MAX_PLAT: i32 = 15;

/// Formate un f64 pour l’utilisateur, ex: 49.0828025477707, 32, 2.8, 1.5E+20.
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    // "d.ddddddddddddddeX" : l’arrondi à 15 chiffres est fait par le formateur
    let sci = format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, v);
    let Some((mantisse, exposant)) = sci.split_once('e') else {
        return v.to_string();
    };
    let Ok(exposant) = exposant.parse::<i32>() else {
        return v.to_string();
    };

    let negatif = mantisse.starts_with('-');
    let chiffres: String = mantisse.chars().filter(|c| c.is_ascii_digit()).collect();
    let chiffres = chiffres.trim_end_matches('0');
    // v != 0 => premier chiffre non nul, `chiffres` n’est jamais vide

    let corps = if (EXPOSANT_MIN_PLAT..EXPOSANT_MAX_PLAT).contains(&exposant) {
        format_plat(chiffres, exposant)
    } else {
        format_scientifique(chiffres, exposant)
    };

    if negatif {
        format!("-{corps}")
    } else {
        corps
    }
}

fn format_plat(chiffres: &str, exposant: i32) -> String {
    if exposant < 0 {
        let zeros = "0".repeat((-exposant - 1) as usize);
        return format!("0.{zeros}{chiffres}");
    }

    let entiers = exposant as usize + 1;
    if chiffres.len() <= entiers {
        format!("{chiffres}{}", "0".repeat(entiers - chiffres.len()))
    } else {
        format!("{}.{}", &chiffres[..entiers], &chiffres[entiers..])
    }
}

fn format_scientifique(chiffres: &str, exposant: i32) -> String {
    let (tete, reste) = chiffres.split_at(1);
    let signe = if exposant < 0 { '-' } else { '+' };
    if reste.is_empty() {
        format!("{tete}E{signe}{:02}", exposant.abs())
    } else {
        format!("{tete}.{reste}E{signe}{:02}", exposant.abs())
    }
}
