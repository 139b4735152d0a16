//! Authored fusion rows, one per unordered pair of distinct arcanas.
//!
//! Each row is written with the lower-ranked arcana first. Judgement never
//! appears as an ingredient.

use crate::arcana::Arcana::{self, *};

/// `(ingredient, ingredient, result)` in declaration order.
pub(super) const FUSION_ROWS: &[(Arcana, Arcana, Arcana)] = &[
    (Fool, Magician, Fortune),
    (Fool, Priestess, Lovers),
    (Fool, Empress, Hierophant),
    (Fool, Emperor, Justice),
    (Fool, Hierophant, Emperor),
    (Fool, Lovers, Chariot),
    (Fool, Chariot, Moon),
    (Fool, Justice, Hermit),
    (Fool, Hermit, Priestess),
    (Fool, Fortune, Strength),
    (Fool, Strength, Death),
    (Fool, HangedMan, Empress),
    (Fool, Death, Tower),
    (Fool, Temperance, Sun),
    (Fool, Devil, Magician),
    (Fool, Tower, Star),
    (Fool, Star, Temperance),
    (Fool, Moon, Devil),
    (Fool, Sun, Judgement),

    (Magician, Priestess, Temperance),
    (Magician, Empress, Justice),
    (Magician, Emperor, Hierophant),
    (Magician, Hierophant, Lovers),
    (Magician, Lovers, Devil),
    (Magician, Chariot, Priestess),
    (Magician, Justice, Emperor),
    (Magician, Hermit, Strength),
    (Magician, Fortune, Chariot),
    (Magician, Strength, Fortune),
    (Magician, HangedMan, Hermit),
    (Magician, Death, Moon),
    (Magician, Temperance, HangedMan),
    (Magician, Devil, Tower),
    (Magician, Tower, Death),
    (Magician, Star, Sun),
    (Magician, Moon, Star),
    (Magician, Sun, Empress),

    (Priestess, Empress, Lovers),
    (Priestess, Emperor, Fortune),
    (Priestess, Hierophant, Justice),
    (Priestess, Lovers, Hermit),
    (Priestess, Chariot, Emperor),
    (Priestess, Justice, Strength),
    (Priestess, Hermit, Magician),
    (Priestess, Fortune, Moon),
    (Priestess, Strength, HangedMan),
    (Priestess, HangedMan, Death),
    (Priestess, Death, Hierophant),
    (Priestess, Temperance, Devil),
    (Priestess, Devil, Empress),
    (Priestess, Tower, Chariot),
    (Priestess, Star, Tower),
    (Priestess, Moon, Temperance),
    (Priestess, Sun, Star),

    (Empress, Emperor, Chariot),
    (Empress, Hierophant, Strength),
    (Empress, Lovers, Magician),
    (Empress, Chariot, Hierophant),
    (Empress, Justice, Lovers),
    (Empress, Hermit, HangedMan),
    (Empress, Fortune, Temperance),
    (Empress, Strength, Sun),
    (Empress, HangedMan, Fortune),
    (Empress, Death, Devil),
    (Empress, Temperance, Moon),
    (Empress, Devil, Tower),
    (Empress, Tower, Star),
    (Empress, Star, Death),
    (Empress, Moon, Priestess),
    (Empress, Sun, Emperor),

    (Emperor, Hierophant, Magician),
    (Emperor, Lovers, Strength),
    (Emperor, Chariot, Justice),
    (Emperor, Justice, Chariot),
    (Emperor, Hermit, Fortune),
    (Emperor, Fortune, Empress),
    (Emperor, Strength, Priestess),
    (Emperor, HangedMan, Moon),
    (Emperor, Death, Temperance),
    (Emperor, Temperance, Hermit),
    (Emperor, Devil, Star),
    (Emperor, Tower, Hierophant),
    (Emperor, Star, Lovers),
    (Emperor, Moon, Devil),
    (Emperor, Sun, Tower),

    (Hierophant, Lovers, Empress),
    (Hierophant, Chariot, Fortune),
    (Hierophant, Justice, Magician),
    (Hierophant, Hermit, Chariot),
    (Hierophant, Fortune, Death),
    (Hierophant, Strength, Emperor),
    (Hierophant, HangedMan, Priestess),
    (Hierophant, Death, Hermit),
    (Hierophant, Temperance, Strength),
    (Hierophant, Devil, Moon),
    (Hierophant, Tower, Devil),
    (Hierophant, Star, Temperance),
    (Hierophant, Moon, Tower),
    (Hierophant, Sun, HangedMan),

    (Lovers, Chariot, Fool),
    (Lovers, Justice, Fortune),
    (Lovers, Hermit, Empress),
    (Lovers, Fortune, Emperor),
    (Lovers, Strength, Chariot),
    (Lovers, HangedMan, Star),
    (Lovers, Death, Sun),
    (Lovers, Temperance, Hierophant),
    (Lovers, Devil, Moon),
    (Lovers, Tower, Priestess),
    (Lovers, Star, Hermit),
    (Lovers, Moon, Magician),
    (Lovers, Sun, Strength),

    (Chariot, Justice, Lovers),
    (Chariot, Hermit, Star),
    (Chariot, Fortune, Hierophant),
    (Chariot, Strength, Magician),
    (Chariot, HangedMan, Sun),
    (Chariot, Death, Empress),
    (Chariot, Temperance, Emperor),
    (Chariot, Devil, Strength),
    (Chariot, Tower, Hermit),
    (Chariot, Star, Fortune),
    (Chariot, Moon, HangedMan),
    (Chariot, Sun, Devil),

    (Justice, Hermit, Tower),
    (Justice, Fortune, Priestess),
    (Justice, Strength, Hierophant),
    (Justice, HangedMan, Temperance),
    (Justice, Death, Star),
    (Justice, Temperance, Moon),
    (Justice, Devil, Hermit),
    (Justice, Tower, Fortune),
    (Justice, Star, Emperor),
    (Justice, Moon, Empress),
    (Justice, Sun, Chariot),

    (Hermit, Fortune, Lovers),
    (Hermit, Strength, Devil),
    (Hermit, HangedMan, Tower),
    (Hermit, Death, Empress),
    (Hermit, Temperance, Emperor),
    (Hermit, Devil, Fortune),
    (Hermit, Tower, Priestess),
    (Hermit, Star, Chariot),
    (Hermit, Moon, Justice),
    (Hermit, Sun, Moon),

    (Fortune, Strength, Star),
    (Fortune, HangedMan, Magician),
    (Fortune, Death, Lovers),
    (Fortune, Temperance, Chariot),
    (Fortune, Devil, Justice),
    (Fortune, Tower, Empress),
    (Fortune, Star, Hermit),
    (Fortune, Moon, Emperor),
    (Fortune, Sun, Priestess),

    (Strength, HangedMan, Hermit),
    (Strength, Death, Chariot),
    (Strength, Temperance, Justice),
    (Strength, Devil, Empress),
    (Strength, Tower, Moon),
    (Strength, Star, Magician),
    (Strength, Moon, Hierophant),
    (Strength, Sun, Fortune),

    (HangedMan, Death, Devil),
    (HangedMan, Temperance, Chariot),
    (HangedMan, Devil, Hierophant),
    (HangedMan, Tower, Magician),
    (HangedMan, Star, Justice),
    (HangedMan, Moon, Fortune),
    (HangedMan, Sun, Tower),

    (Death, Temperance, Magician),
    (Death, Devil, Strength),
    (Death, Tower, Hierophant),
    (Death, Star, Chariot),
    (Death, Moon, Priestess),
    (Death, Sun, Fortune),

    (Temperance, Devil, Fortune),
    (Temperance, Tower, Priestess),
    (Temperance, Star, Lovers),
    (Temperance, Moon, Hermit),
    (Temperance, Sun, Magician),

    (Devil, Tower, HangedMan),
    (Devil, Star, Death),
    (Devil, Moon, Temperance),
    (Devil, Sun, Hermit),

    (Tower, Star, Empress),
    (Tower, Moon, Strength),
    (Tower, Sun, Emperor),

    (Star, Moon, Priestess),
    (Star, Sun, Devil),

    (Moon, Sun, Magician),
];
