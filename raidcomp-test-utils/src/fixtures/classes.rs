/// Class table written for every test unless replaced with `TestBuilder::with_raw_classes`.
///
/// Covers a tank, healers from two classes, ranged and melee damage. There is no
/// `necromancer` class, tests use it for entries that cannot be classified.
pub const DEFAULT_CLASSES_JSON: &str = r##"{
    "mage": {
        "name": "Mage",
        "colour": "#69CCF0",
        "specs": [
            { "name": "Arcane", "icon": "spell_holy_magicalsentry", "role": "dps", "range": "ranged" },
            { "name": "Fire", "icon": "spell_fire_firebolt02", "role": "dps", "range": "ranged" },
            { "name": "Frost", "icon": "spell_frost_frostbolt02", "role": "dps", "range": "ranged" }
        ]
    },
    "priest": {
        "name": "Priest",
        "colour": "#FFFFFF",
        "specs": [
            { "name": "Discipline", "icon": "spell_holy_powerwordshield", "role": "heal" },
            { "name": "Holy", "icon": "spell_holy_guardianspirit", "role": "heal" },
            { "name": "Shadow", "icon": "spell_shadow_shadowwordpain", "role": "dps", "range": "ranged" }
        ]
    },
    "shaman": {
        "name": "Shaman",
        "colour": "#0070DE",
        "specs": [
            { "name": "Restoration", "icon": "spell_nature_magicimmunity", "role": "heal" },
            { "name": "Elemental", "icon": "spell_nature_lightning", "role": "dps", "range": "ranged" },
            { "name": "Enhancement", "icon": "spell_shaman_improvedstormstrike", "role": "dps", "range": "melee" }
        ]
    },
    "warrior": {
        "name": "Warrior",
        "colour": "#C79C6E",
        "specs": [
            { "name": "Protection", "icon": "ability_warrior_defensivestance", "role": "tank" },
            { "name": "Arms", "icon": "ability_warrior_savageblow", "role": "dps", "range": "melee" },
            { "name": "Fury", "icon": "ability_warrior_innerrage", "role": "dps", "range": "melee" }
        ]
    }
}"##;
