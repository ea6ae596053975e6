//! Commands shipped with the binary, used when the workspace config does not
//! name a catalog or registry file.

use crate::model::{CatalogEntry, EffectDef, Preset, SPECIAL_COMMAND_CATEGORY};

pub(crate) struct BuiltinCommand {
    pub(crate) display_name: &'static str,
    pub(crate) identifier: &'static str,
    pub(crate) category: &'static str,
    pub(crate) effect: Option<BuiltinEffect>,
}

pub(crate) struct BuiltinEffect {
    pub(crate) effect_id: &'static str,
    pub(crate) default_params: &'static str,
    pub(crate) presets: &'static [(&'static str, &'static str)],
}

const fn effect(
    display_name: &'static str,
    identifier: &'static str,
    category: &'static str,
    effect_id: &'static str,
    default_params: &'static str,
    presets: &'static [(&'static str, &'static str)],
) -> BuiltinCommand {
    BuiltinCommand {
        display_name,
        identifier,
        category,
        effect: Some(BuiltinEffect {
            effect_id,
            default_params,
            presets,
        }),
    }
}

const fn special(display_name: &'static str, identifier: &'static str) -> BuiltinCommand {
    BuiltinCommand {
        display_name,
        identifier,
        category: SPECIAL_COMMAND_CATEGORY,
        effect: None,
    }
}

// Sorted by display name.
pub(crate) const BUILTIN_COMMANDS: &[BuiltinCommand] = &[
    effect(
        "Amplify",
        "Amplify",
        "Volume and Compression",
        "builtin:Amplify",
        "Ratio=0.9 AllowClipping=0",
        &[],
    ),
    effect(
        "Bass and Treble",
        "BassAndTreble",
        "EQ and Filters",
        "builtin:BassAndTreble",
        "Bass=0 Treble=0 Gain=0 Link Sliders=0",
        &[
            ("Bass Boost", "Bass=6 Treble=0 Gain=-3 Link Sliders=0"),
            ("Treble Cut", "Bass=0 Treble=-6 Gain=0 Link Sliders=0"),
        ],
    ),
    effect(
        "Change Pitch",
        "ChangePitch",
        "Pitch and Tempo",
        "builtin:ChangePitch",
        "Percentage=0 SBSMS=0",
        &[],
    ),
    effect(
        "Change Tempo",
        "ChangeTempo",
        "Pitch and Tempo",
        "builtin:ChangeTempo",
        "Percentage=0 SBSMS=0",
        &[],
    ),
    effect(
        "Compressor",
        "Compressor",
        "Volume and Compression",
        "builtin:Compressor",
        "Threshold=-12 NoiseFloor=-40 Ratio=2 AttackTime=0.2 ReleaseTime=1 Normalize=1 UsePeak=0",
        &[
            (
                "Gentle",
                "Threshold=-18 NoiseFloor=-40 Ratio=1.5 AttackTime=0.5 ReleaseTime=2 Normalize=1 UsePeak=0",
            ),
            (
                "Heavy",
                "Threshold=-24 NoiseFloor=-30 Ratio=6 AttackTime=0.1 ReleaseTime=0.5 Normalize=1 UsePeak=1",
            ),
        ],
    ),
    effect(
        "Echo",
        "Echo",
        "Delay and Reverb",
        "builtin:Echo",
        "Delay=1 Decay=0.5",
        &[
            ("Slapback", "Delay=0.12 Decay=0.3"),
            ("Canyon", "Delay=1.5 Decay=0.7"),
        ],
    ),
    special("Export as FLAC", "ExportFLAC"),
    special("Export as MP3", "ExportMP3"),
    special("Export as WAV", "ExportWAV"),
    effect("Fade In", "FadeIn", "Fading", "builtin:FadeIn", "", &[]),
    effect("Fade Out", "FadeOut", "Fading", "builtin:FadeOut", "", &[]),
    special("Import", "Import2"),
    special("No Action", "NoAction"),
    effect(
        "Normalize",
        "Normalize",
        "Volume and Compression",
        "builtin:Normalize",
        "PeakLevel=-1 ApplyGain=1 RemoveDcOffset=1 StereoIndependent=0",
        &[(
            "Broadcast",
            "PeakLevel=-3 ApplyGain=1 RemoveDcOffset=1 StereoIndependent=0",
        )],
    ),
    effect(
        "Reverb",
        "Reverb",
        "Delay and Reverb",
        "builtin:Reverb",
        "RoomSize=75 Delay=10 Reverberance=50 HfDamping=50 ToneLow=100 ToneHigh=100 WetGain=-1 DryGain=-1 StereoWidth=100 WetOnly=0",
        &[
            (
                "Vocal I",
                "RoomSize=70 Delay=20 Reverberance=40 HfDamping=99 ToneLow=100 ToneHigh=50 WetGain=-12 DryGain=0 StereoWidth=70 WetOnly=0",
            ),
            (
                "Cathedral",
                "RoomSize=90 Delay=30 Reverberance=90 HfDamping=50 ToneLow=100 ToneHigh=80 WetGain=-3 DryGain=-3 StereoWidth=100 WetOnly=0",
            ),
        ],
    ),
    special("Select All", "SelectAll"),
];

pub(crate) fn builtin_entries() -> Vec<CatalogEntry> {
    BUILTIN_COMMANDS
        .iter()
        .map(|c| CatalogEntry::new(c.display_name, c.identifier, c.category))
        .collect()
}

pub(crate) fn builtin_effects() -> Vec<EffectDef> {
    BUILTIN_COMMANDS
        .iter()
        .filter_map(|c| {
            let e = c.effect.as_ref()?;
            Some(EffectDef {
                effect_id: e.effect_id.to_string(),
                identifier: c.identifier.to_string(),
                default_params: e.default_params.to_string(),
                presets: e
                    .presets
                    .iter()
                    .map(|(name, params)| Preset {
                        name: name.to_string(),
                        params: params.to_string(),
                    })
                    .collect(),
            })
        })
        .collect()
}
