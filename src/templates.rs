// src/templates.rs

use crate::types::{ModelFamily, ParameterSet};

/// System instruction sent ahead of the user's idea for the given model
/// family. Pure; the only variable part is the optional aspect-ratio
/// constraint for the non-Midjourney families.
pub fn instruction_for(family: ModelFamily, params: &ParameterSet) -> String {
    match family {
        ModelFamily::NanoBanana => {
            let ar_instruction = match params.aspect_ratio {
                Some(ref ar) => format!(
                    "\n- **Aspect Ratio**: The image MUST be in {} format.",
                    ar
                ),
                None => String::new(),
            };
            format!(
                r#"You are an expert AI Art Prompt Engineer.
Your task is to take a simple user idea and expand it into a rich, descriptive, natural language prompt.

Structure the prompt to include:
- **Subject**: Detailed description of the main subject.
- **Details**: Clothing, textures, accessories.
- **Environment**: Background, lighting, weather, time of day.
- **Mood/Atmosphere**: Emotional tone, colors.
- **Style**: Artistic style (e.g., Photorealistic, Oil Painting, Cyberpunk).
- **Camera**: Lens type, angle, focus (if photorealistic).{}

Output ONLY the final prompt in English. Do not include labels like "Subject:" in the final output, just flow naturally."#,
                ar_instruction
            )
        }
        ModelFamily::Jimeng => {
            let ar_instruction = match params.aspect_ratio {
                Some(ref ar) => format!("\n- Aspect Ratio (画幅比例): {}", ar),
                None => String::new(),
            };
            format!(
                r#"You are an expert AI Art Prompt Engineer for Jimeng AI (SeaDream 4.0).
Your task is to take a simple user idea and expand it into a high-quality Chinese prompt.

Constraints:
- Language: Chinese (Simplified).
- Length: Under 800 Chinese characters.
- Structure: Comma-separated phrases or short sentences are preferred.

Include:
- Subject description (主体描述)
- Detail description (细节描述)
- Artist style analysis (艺术家风格分析)
- Theme features (主题特征)
- Camera/Lens (相机, 镜头)
- Composition (构图)
- Mood/Atmosphere (情绪, 氛围){}

Output ONLY the final Chinese prompt."#,
                ar_instruction
            )
        }
        ModelFamily::Midjourney => r#"You are an expert AI Art Prompt Engineer for Midjourney v6.
Your task is to take a simple user idea and expand it into a detailed Midjourney prompt.

Structure:
[Subject Description], [Environment & Context], [Art Style & Medium], [Lighting & Color Palette], [Camera & Composition], [Mood & Atmosphere]

- Use precise, evocative vocabulary.
- Focus on visual descriptors.

Output ONLY the prompt text. Do NOT include parameters like --ar or --v yet (these will be appended by the system)."#
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_with_ar(ar: &str) -> ParameterSet {
        ParameterSet {
            aspect_ratio: Some(ar.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn nano_banana_includes_mandatory_aspect_ratio_sentence() {
        let instruction = instruction_for(ModelFamily::NanoBanana, &params_with_ar("16:9"));
        assert!(instruction.contains("The image MUST be in 16:9 format."));
    }

    #[test]
    fn nano_banana_omits_aspect_ratio_when_not_set() {
        let instruction = instruction_for(ModelFamily::NanoBanana, &ParameterSet::default());
        assert!(!instruction.contains("Aspect Ratio"));
    }

    #[test]
    fn jimeng_aspect_ratio_uses_its_own_facet_line() {
        let instruction = instruction_for(ModelFamily::Jimeng, &params_with_ar("9:16"));
        assert!(instruction.contains("Aspect Ratio (画幅比例): 9:16"));
    }

    #[test]
    fn character_ceiling_appears_only_in_jimeng() {
        let params = ParameterSet::default();
        assert!(instruction_for(ModelFamily::Jimeng, &params).contains("Under 800 Chinese characters"));
        assert!(!instruction_for(ModelFamily::NanoBanana, &params).contains("800"));
        assert!(!instruction_for(ModelFamily::Midjourney, &params).contains("800"));
    }

    #[test]
    fn flag_prohibition_appears_only_in_midjourney() {
        let params = ParameterSet::default();
        assert!(instruction_for(ModelFamily::Midjourney, &params).contains("Do NOT include parameters"));
        assert!(!instruction_for(ModelFamily::NanoBanana, &params).contains("--ar"));
        assert!(!instruction_for(ModelFamily::Jimeng, &params).contains("--ar"));
    }

    #[test]
    fn chinese_output_contract_stays_out_of_english_families() {
        let params = ParameterSet::default();
        assert!(instruction_for(ModelFamily::Jimeng, &params).contains("Chinese (Simplified)"));
        assert!(!instruction_for(ModelFamily::NanoBanana, &params).contains("Chinese"));
        assert!(!instruction_for(ModelFamily::Midjourney, &params).contains("Chinese"));
    }

    #[test]
    fn midjourney_instruction_ignores_parameter_set() {
        let with_params = instruction_for(ModelFamily::Midjourney, &params_with_ar("21:9"));
        let without = instruction_for(ModelFamily::Midjourney, &ParameterSet::default());
        assert_eq!(with_params, without);
    }
}
