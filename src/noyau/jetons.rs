// src/noyau/jetons.rs

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),

    Plus,
    Moins,
    Fois,
    Division,

    ParG,
    ParD,
}

impl Jeton {
    /// Vrai pour les quatre opérateurs binaires (les parenthèses n'en sont pas).
    pub fn est_operateur(&self) -> bool {
        matches!(
            self,
            Jeton::Plus | Jeton::Moins | Jeton::Fois | Jeton::Division
        )
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .25)
/// - opérateurs + - * /
/// - × (glyphe du pavé) et x (clavier), normalisés en '*'
/// - parenthèses ( )
/// - suffixe % collé à un nombre : 50% ≡ (50/100), désucré dès la tokenisation
///
/// Refuse tout autre caractère, l'entrée vide, et une suite bornée par un
/// opérateur ("+5", "5+") : une opérande en attente n'est jamais devinée.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, String> {
    let mut out = Vec::new();

    // Normalisation avant lecture : × et x sont le même opérateur que '*'.
    let chars: Vec<char> = s
        .chars()
        .map(|c| if c == '×' || c == 'x' { '*' } else { c })
        .collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Jeton::ParG);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::ParD);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Jeton::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Jeton::Moins);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Jeton::Fois);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Jeton::Division);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre : run maximal de chiffres et de points.
        // Un littéral qui ne parse pas en f64 ("1.2.3", ".") fait échouer
        // toute la tokenisation.
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            let n: f64 = lit
                .parse()
                .map_err(|_| format!("nombre invalide: {lit:?}"))?;

            // % collé au nombre : réécrit en ( n / 100 )
            if i < chars.len() && chars[i] == '%' {
                out.push(Jeton::ParG);
                out.push(Jeton::Nombre(n));
                out.push(Jeton::Division);
                out.push(Jeton::Nombre(100.0));
                out.push(Jeton::ParD);
                i += 1;
            } else {
                out.push(Jeton::Nombre(n));
            }
            continue;
        }

        // % isolé (pas collé à un nombre) : ignoré, le pavé ne devrait pas
        // pouvoir le produire.
        if c == '%' {
            i += 1;
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    // Suite vide ou bornée par un opérateur : saisie incomplète, on refuse.
    if out.is_empty() {
        return Err("entrée vide".into());
    }
    if out.first().map_or(false, Jeton::est_operateur)
        || out.last().map_or(false, Jeton::est_operateur)
    {
        return Err("expression incomplète".into());
    }

    Ok(out)
}
