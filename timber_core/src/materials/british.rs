//! British strength classes (BS EN 338 solid softwood, BS EN 14080 glulam).
//!
//! Values are tabulated in N/mm² and kg/m³ exactly as printed; stresses and
//! moduli are converted to pascals on construction.

use super::{DensityProperties, StiffnessProperties, StrengthClass, StrengthProperties, TimberType};
use crate::units::n_per_mm2;

/// Tabulated row: f_m,k, f_t,0,k, f_t,90,k, f_c,0,k, f_c,90,k, f_v,k (N/mm²),
/// E_0,mean, E_0.05, E_90,mean, G_mean (N/mm²), ρ_mean, ρ_k (kg/m³)
type Row = (&'static str, TimberType, [f64; 6], [f64; 4], [f64; 2]);

const TABLE: [Row; 9] = [
    // Solid softwood (BS EN 338)
    ("C16", TimberType::Solid, [16.0, 10.0, 0.5, 17.0, 2.2, 1.8], [8000.0, 5400.0, 270.0, 500.0], [370.0, 310.0]),
    ("C24", TimberType::Solid, [24.0, 14.0, 0.5, 21.0, 2.5, 2.5], [11000.0, 7400.0, 370.0, 690.0], [420.0, 350.0]),
    ("C27", TimberType::Solid, [27.0, 16.0, 0.6, 22.0, 2.6, 2.8], [11500.0, 7700.0, 380.0, 720.0], [450.0, 370.0]),
    // Softwood glulam
    ("GL24c", TimberType::Glulam, [24.0, 14.0, 0.35, 21.0, 2.4, 2.2], [11600.0, 9400.0, 320.0, 590.0], [395.0, 350.0]),
    ("GL28c", TimberType::Glulam, [28.0, 16.5, 0.4, 24.0, 2.7, 2.7], [12600.0, 10200.0, 390.0, 720.0], [430.0, 380.0]),
    ("GL32c", TimberType::Glulam, [32.0, 19.5, 0.45, 26.5, 3.0, 3.2], [13700.0, 11100.0, 420.0, 780.0], [460.0, 410.0]),
    ("GL24h", TimberType::Glulam, [24.0, 16.5, 0.4, 24.0, 2.7, 2.7], [11600.0, 9400.0, 390.0, 720.0], [420.0, 380.0]),
    ("GL28h", TimberType::Glulam, [28.0, 19.5, 0.45, 26.5, 3.0, 3.2], [12600.0, 10200.0, 420.0, 780.0], [450.0, 410.0]),
    ("GL32h", TimberType::Glulam, [32.0, 22.5, 0.5, 29.0, 3.3, 3.8], [13700.0, 11100.0, 460.0, 850.0], [475.0, 430.0]),
];

/// All British strength classes in table order.
pub fn strength_classes() -> Vec<StrengthClass> {
    TABLE.iter().map(to_strength_class).collect()
}

fn to_strength_class(row: &Row) -> StrengthClass {
    let (name, timber_type, [f_m, f_t0, f_t90, f_c0, f_c90, f_v], [e_mean, e_05, e_90, g_mean], [rho_mean, rho_k]) =
        *row;
    StrengthClass {
        name: name.to_string(),
        timber_type,
        strength: StrengthProperties {
            bending_parallel_to_grain: n_per_mm2(f_m),
            tension_parallel_to_grain: n_per_mm2(f_t0),
            tension_perpendicular_to_grain: n_per_mm2(f_t90),
            compression_parallel_to_grain: n_per_mm2(f_c0),
            compression_perpendicular_to_grain: n_per_mm2(f_c90),
            shear_parallel_to_grain: n_per_mm2(f_v),
        },
        stiffness: StiffnessProperties {
            mean_moe_parallel_to_grain: n_per_mm2(e_mean),
            fifth_percentile_moe_parallel_to_grain: n_per_mm2(e_05),
            mean_moe_perpendicular_to_grain: n_per_mm2(e_90),
            mean_shear_modulus: n_per_mm2(g_mean),
        },
        density: DensityProperties {
            mean: rho_mean,
            minimum: rho_k,
        },
    }
}
