//! # Default Inputs
//!
//! Starting input values for each calculator, in the active unit system.
//! These seed new calculation forms; the engine itself never consults the
//! unit system — every value carries its own tag.

use crate::calculations::CalculatorKind;
use crate::inputs::{
    AnchorType, CalculationInputs, ModelingMethod, ReinforcementLayers, TransverseType,
};
use crate::settings::UnitSystem;
use crate::units::{
    DensityUnit, ForceUnit, LengthUnit, PressureUnit, SoilUnitWeightUnit, StressUnit,
};

/// Default inputs for `kind` under the given unit system.
pub fn default_inputs(kind: CalculatorKind, unit_system: UnitSystem) -> CalculationInputs {
    match kind {
        CalculatorKind::RectangularColumn => rectangular_column(unit_system),
        CalculatorKind::CircularColumn => circular_column(unit_system),
        CalculatorKind::RectangularBeam => rectangular_beam(unit_system),
        CalculatorKind::TBeam => t_beam(unit_system),
        CalculatorKind::OneWaySlab => one_way_slab(unit_system),
        CalculatorKind::TwoWaySlab => two_way_slab(unit_system),
        CalculatorKind::IsolatedFooting => isolated_footing(unit_system),
        CalculatorKind::CombinedFooting => combined_footing(unit_system),
        CalculatorKind::StripFooting => strip_footing(unit_system),
        CalculatorKind::PileCapFoundation => pile_cap_foundation(unit_system),
        CalculatorKind::RectangularWall => rectangular_wall(unit_system),
        CalculatorKind::RetainingWall => retaining_wall(unit_system),
        CalculatorKind::Diaphragm => diaphragm(unit_system),
        CalculatorKind::BracketCorbel => bracket_corbel(unit_system),
        CalculatorKind::BeamColumnJoint => beam_column_joint(unit_system),
        CalculatorKind::Anchorage => anchorage(unit_system),
    }
}

fn rectangular_column(system: UnitSystem) -> CalculationInputs {
    match system {
        UnitSystem::Metric => CalculationInputs {
            width: Some(400.0),
            width_unit: Some(LengthUnit::Millimeters),
            depth: Some(400.0),
            depth_unit: Some(LengthUnit::Millimeters),
            height: Some(3.0),
            height_unit: Some(LengthUnit::Meters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            longitudinal_bar_size: Some("16mm".to_string()),
            longitudinal_bar_count: Some(8),
            transverse_type: Some(TransverseType::Tied),
            transverse_bar_size: Some("10mm".to_string()),
            transverse_spacing: Some(200.0),
            transverse_spacing_unit: Some(LengthUnit::Millimeters),
            ..Default::default()
        },
        UnitSystem::Imperial => CalculationInputs {
            width: Some(16.0),
            width_unit: Some(LengthUnit::Inches),
            depth: Some(16.0),
            depth_unit: Some(LengthUnit::Inches),
            height: Some(10.0),
            height_unit: Some(LengthUnit::Feet),
            concrete_unit_weight: Some(150.0),
            concrete_unit_weight_unit: Some(DensityUnit::PoundsPerCubicFoot),
            longitudinal_bar_size: Some("#5".to_string()),
            longitudinal_bar_count: Some(8),
            transverse_type: Some(TransverseType::Tied),
            transverse_bar_size: Some("#3".to_string()),
            transverse_spacing: Some(8.0),
            transverse_spacing_unit: Some(LengthUnit::Inches),
            ..Default::default()
        },
    }
}

fn circular_column(system: UnitSystem) -> CalculationInputs {
    match system {
        UnitSystem::Metric => CalculationInputs {
            diameter: Some(500.0),
            diameter_unit: Some(LengthUnit::Millimeters),
            height: Some(3.0),
            height_unit: Some(LengthUnit::Meters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            longitudinal_bar_size: Some("20mm".to_string()),
            longitudinal_bar_count: Some(6),
            transverse_type: Some(TransverseType::Spiral),
            transverse_bar_size: Some("10mm".to_string()),
            pitch: Some(75.0),
            pitch_unit: Some(LengthUnit::Millimeters),
            transverse_spacing: Some(150.0),
            transverse_spacing_unit: Some(LengthUnit::Millimeters),
            ..Default::default()
        },
        UnitSystem::Imperial => CalculationInputs {
            diameter: Some(20.0),
            diameter_unit: Some(LengthUnit::Inches),
            height: Some(10.0),
            height_unit: Some(LengthUnit::Feet),
            concrete_unit_weight: Some(150.0),
            concrete_unit_weight_unit: Some(DensityUnit::PoundsPerCubicFoot),
            longitudinal_bar_size: Some("#5".to_string()),
            longitudinal_bar_count: Some(6),
            transverse_type: Some(TransverseType::Spiral),
            transverse_bar_size: Some("#3".to_string()),
            pitch: Some(3.0),
            pitch_unit: Some(LengthUnit::Inches),
            transverse_spacing: Some(6.0),
            transverse_spacing_unit: Some(LengthUnit::Inches),
            ..Default::default()
        },
    }
}

fn rectangular_beam(system: UnitSystem) -> CalculationInputs {
    match system {
        UnitSystem::Metric => CalculationInputs {
            width: Some(300.0),
            width_unit: Some(LengthUnit::Millimeters),
            depth: Some(500.0),
            depth_unit: Some(LengthUnit::Millimeters),
            span: Some(8.0),
            span_unit: Some(LengthUnit::Meters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            top_bar_size: Some("16mm".to_string()),
            top_bar_count: Some(3),
            bottom_bar_size: Some("20mm".to_string()),
            bottom_bar_count: Some(4),
            transverse_type: Some(TransverseType::Stirrup),
            transverse_bar_size: Some("10mm".to_string()),
            transverse_spacing: Some(150.0),
            transverse_spacing_unit: Some(LengthUnit::Millimeters),
            ..Default::default()
        },
        UnitSystem::Imperial => CalculationInputs {
            width: Some(12.0),
            width_unit: Some(LengthUnit::Inches),
            depth: Some(20.0),
            depth_unit: Some(LengthUnit::Inches),
            span: Some(25.0),
            span_unit: Some(LengthUnit::Feet),
            concrete_unit_weight: Some(150.0),
            concrete_unit_weight_unit: Some(DensityUnit::PoundsPerCubicFoot),
            top_bar_size: Some("#5".to_string()),
            top_bar_count: Some(3),
            bottom_bar_size: Some("#5".to_string()),
            bottom_bar_count: Some(4),
            transverse_type: Some(TransverseType::Stirrup),
            transverse_bar_size: Some("#3".to_string()),
            transverse_spacing: Some(6.0),
            transverse_spacing_unit: Some(LengthUnit::Inches),
            ..Default::default()
        },
    }
}

fn t_beam(system: UnitSystem) -> CalculationInputs {
    match system {
        UnitSystem::Metric => CalculationInputs {
            width: Some(300.0),
            width_unit: Some(LengthUnit::Millimeters),
            depth: Some(600.0),
            depth_unit: Some(LengthUnit::Millimeters),
            flange_width: Some(1200.0),
            flange_width_unit: Some(LengthUnit::Millimeters),
            flange_thickness: Some(150.0),
            flange_thickness_unit: Some(LengthUnit::Millimeters),
            span: Some(8.0),
            span_unit: Some(LengthUnit::Meters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            top_bar_size: Some("16mm".to_string()),
            top_bar_count: Some(4),
            bottom_bar_size: Some("25mm".to_string()),
            bottom_bar_count: Some(4),
            transverse_bar_size: Some("10mm".to_string()),
            transverse_spacing: Some(200.0),
            transverse_spacing_unit: Some(LengthUnit::Millimeters),
            ..Default::default()
        },
        UnitSystem::Imperial => CalculationInputs {
            width: Some(12.0),
            width_unit: Some(LengthUnit::Inches),
            depth: Some(24.0),
            depth_unit: Some(LengthUnit::Inches),
            flange_width: Some(48.0),
            flange_width_unit: Some(LengthUnit::Inches),
            flange_thickness: Some(6.0),
            flange_thickness_unit: Some(LengthUnit::Inches),
            span: Some(25.0),
            span_unit: Some(LengthUnit::Feet),
            concrete_unit_weight: Some(150.0),
            concrete_unit_weight_unit: Some(DensityUnit::PoundsPerCubicFoot),
            top_bar_size: Some("#5".to_string()),
            top_bar_count: Some(4),
            bottom_bar_size: Some("#5".to_string()),
            bottom_bar_count: Some(4),
            transverse_bar_size: Some("#3".to_string()),
            transverse_spacing: Some(8.0),
            transverse_spacing_unit: Some(LengthUnit::Inches),
            ..Default::default()
        },
    }
}

fn one_way_slab(system: UnitSystem) -> CalculationInputs {
    match system {
        UnitSystem::Metric => CalculationInputs {
            depth: Some(200.0),
            depth_unit: Some(LengthUnit::Millimeters),
            length: Some(8.0),
            length_unit: Some(LengthUnit::Meters),
            span: Some(5.0),
            span_unit: Some(LengthUnit::Meters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            main_bar_size: Some("16mm".to_string()),
            main_bar_spacing: Some(150.0),
            main_bar_spacing_unit: Some(LengthUnit::Millimeters),
            temp_bar_size: Some("12mm".to_string()),
            temp_bar_spacing: Some(250.0),
            temp_bar_spacing_unit: Some(LengthUnit::Millimeters),
            ..Default::default()
        },
        UnitSystem::Imperial => CalculationInputs {
            depth: Some(8.0),
            depth_unit: Some(LengthUnit::Inches),
            length: Some(25.0),
            length_unit: Some(LengthUnit::Feet),
            span: Some(15.0),
            span_unit: Some(LengthUnit::Feet),
            concrete_unit_weight: Some(150.0),
            concrete_unit_weight_unit: Some(DensityUnit::PoundsPerCubicFoot),
            main_bar_size: Some("#5".to_string()),
            main_bar_spacing: Some(6.0),
            main_bar_spacing_unit: Some(LengthUnit::Inches),
            temp_bar_size: Some("#4".to_string()),
            temp_bar_spacing: Some(10.0),
            temp_bar_spacing_unit: Some(LengthUnit::Inches),
            ..Default::default()
        },
    }
}

fn two_way_slab(system: UnitSystem) -> CalculationInputs {
    match system {
        UnitSystem::Metric => CalculationInputs {
            depth: Some(250.0),
            depth_unit: Some(LengthUnit::Millimeters),
            length: Some(8.0),
            length_unit: Some(LengthUnit::Meters),
            span: Some(6.0),
            span_unit: Some(LengthUnit::Meters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            short_dir_bar_size: Some("16mm".to_string()),
            short_dir_bar_spacing: Some(150.0),
            short_dir_bar_spacing_unit: Some(LengthUnit::Millimeters),
            long_dir_bar_size: Some("12mm".to_string()),
            long_dir_bar_spacing: Some(200.0),
            long_dir_bar_spacing_unit: Some(LengthUnit::Millimeters),
            ..Default::default()
        },
        UnitSystem::Imperial => CalculationInputs {
            depth: Some(10.0),
            depth_unit: Some(LengthUnit::Inches),
            length: Some(25.0),
            length_unit: Some(LengthUnit::Feet),
            span: Some(20.0),
            span_unit: Some(LengthUnit::Feet),
            concrete_unit_weight: Some(150.0),
            concrete_unit_weight_unit: Some(DensityUnit::PoundsPerCubicFoot),
            short_dir_bar_size: Some("#5".to_string()),
            short_dir_bar_spacing: Some(6.0),
            short_dir_bar_spacing_unit: Some(LengthUnit::Inches),
            long_dir_bar_size: Some("#4".to_string()),
            long_dir_bar_spacing: Some(8.0),
            long_dir_bar_spacing_unit: Some(LengthUnit::Inches),
            ..Default::default()
        },
    }
}

fn isolated_footing(system: UnitSystem) -> CalculationInputs {
    match system {
        UnitSystem::Metric => CalculationInputs {
            length: Some(2.5),
            length_unit: Some(LengthUnit::Meters),
            width: Some(2.5),
            width_unit: Some(LengthUnit::Meters),
            depth: Some(500.0),
            depth_unit: Some(LengthUnit::Millimeters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            soil_bearing_pressure: Some(150.0),
            soil_bearing_pressure_unit: Some(PressureUnit::Kilopascals),
            footing_bottom_bar_size: Some("16mm".to_string()),
            footing_bottom_bar_spacing: Some(150.0),
            footing_bottom_bar_spacing_unit: Some(LengthUnit::Millimeters),
            footing_top_bar_size: Some("None".to_string()),
            dowel_bar_size: Some("20mm".to_string()),
            dowel_bar_count: Some(8),
            ..Default::default()
        },
        UnitSystem::Imperial => CalculationInputs {
            length: Some(8.0),
            length_unit: Some(LengthUnit::Feet),
            width: Some(8.0),
            width_unit: Some(LengthUnit::Feet),
            depth: Some(18.0),
            depth_unit: Some(LengthUnit::Inches),
            concrete_unit_weight: Some(150.0),
            concrete_unit_weight_unit: Some(DensityUnit::PoundsPerCubicFoot),
            soil_bearing_pressure: Some(3000.0),
            soil_bearing_pressure_unit: Some(PressureUnit::Psf),
            footing_bottom_bar_size: Some("#5".to_string()),
            footing_bottom_bar_spacing: Some(6.0),
            footing_bottom_bar_spacing_unit: Some(LengthUnit::Inches),
            footing_top_bar_size: Some("None".to_string()),
            dowel_bar_size: Some("#5".to_string()),
            dowel_bar_count: Some(8),
            ..Default::default()
        },
    }
}

fn combined_footing(system: UnitSystem) -> CalculationInputs {
    match system {
        UnitSystem::Metric => CalculationInputs {
            length: Some(6.0),
            length_unit: Some(LengthUnit::Meters),
            width: Some(2.5),
            width_unit: Some(LengthUnit::Meters),
            depth: Some(600.0),
            depth_unit: Some(LengthUnit::Millimeters),
            // Column spacing rides on the span field
            span: Some(4.0),
            span_unit: Some(LengthUnit::Meters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            footing_bottom_bar_size: Some("20mm".to_string()),
            footing_bottom_bar_spacing: Some(150.0),
            footing_bottom_bar_spacing_unit: Some(LengthUnit::Millimeters),
            footing_top_bar_size: Some("16mm".to_string()),
            footing_top_bar_spacing: Some(200.0),
            footing_top_bar_spacing_unit: Some(LengthUnit::Millimeters),
            ..Default::default()
        },
        UnitSystem::Imperial => CalculationInputs {
            length: Some(20.0),
            length_unit: Some(LengthUnit::Feet),
            width: Some(8.0),
            width_unit: Some(LengthUnit::Feet),
            depth: Some(24.0),
            depth_unit: Some(LengthUnit::Inches),
            span: Some(12.0),
            span_unit: Some(LengthUnit::Feet),
            concrete_unit_weight: Some(150.0),
            concrete_unit_weight_unit: Some(DensityUnit::PoundsPerCubicFoot),
            footing_bottom_bar_size: Some("#5".to_string()),
            footing_bottom_bar_spacing: Some(6.0),
            footing_bottom_bar_spacing_unit: Some(LengthUnit::Inches),
            footing_top_bar_size: Some("#5".to_string()),
            footing_top_bar_spacing: Some(8.0),
            footing_top_bar_spacing_unit: Some(LengthUnit::Inches),
            ..Default::default()
        },
    }
}

fn strip_footing(system: UnitSystem) -> CalculationInputs {
    match system {
        UnitSystem::Metric => CalculationInputs {
            depth: Some(400.0),
            depth_unit: Some(LengthUnit::Millimeters),
            width: Some(800.0),
            width_unit: Some(LengthUnit::Millimeters),
            length: Some(10.0),
            length_unit: Some(LengthUnit::Meters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            main_bar_size: Some("12mm".to_string()),
            main_bar_spacing: Some(200.0),
            main_bar_spacing_unit: Some(LengthUnit::Millimeters),
            temp_bar_size: Some("12mm".to_string()),
            temp_bar_spacing: Some(250.0),
            temp_bar_spacing_unit: Some(LengthUnit::Millimeters),
            ..Default::default()
        },
        UnitSystem::Imperial => CalculationInputs {
            depth: Some(16.0),
            depth_unit: Some(LengthUnit::Inches),
            width: Some(32.0),
            width_unit: Some(LengthUnit::Inches),
            length: Some(30.0),
            length_unit: Some(LengthUnit::Feet),
            concrete_unit_weight: Some(150.0),
            concrete_unit_weight_unit: Some(DensityUnit::PoundsPerCubicFoot),
            main_bar_size: Some("#4".to_string()),
            main_bar_spacing: Some(8.0),
            main_bar_spacing_unit: Some(LengthUnit::Inches),
            temp_bar_size: Some("#4".to_string()),
            temp_bar_spacing: Some(10.0),
            temp_bar_spacing_unit: Some(LengthUnit::Inches),
            ..Default::default()
        },
    }
}

fn pile_cap_foundation(system: UnitSystem) -> CalculationInputs {
    match system {
        UnitSystem::Metric => CalculationInputs {
            length: Some(2000.0),
            length_unit: Some(LengthUnit::Millimeters),
            width: Some(2000.0),
            width_unit: Some(LengthUnit::Millimeters),
            depth: Some(800.0),
            depth_unit: Some(LengthUnit::Millimeters),
            pile_count: Some(4),
            pile_diameter: Some(500.0),
            pile_diameter_unit: Some(LengthUnit::Millimeters),
            pile_spacing: Some(1500.0),
            pile_spacing_unit: Some(LengthUnit::Millimeters),
            cap_edge_distance: Some(250.0),
            cap_edge_distance_unit: Some(LengthUnit::Millimeters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            footing_bottom_bar_size: Some("20mm".to_string()),
            footing_bottom_bar_spacing: Some(150.0),
            footing_bottom_bar_spacing_unit: Some(LengthUnit::Millimeters),
            footing_top_bar_size: Some("16mm".to_string()),
            footing_top_bar_spacing: Some(200.0),
            footing_top_bar_spacing_unit: Some(LengthUnit::Millimeters),
            dowel_bar_size: Some("20mm".to_string()),
            dowel_bar_count: Some(8),
            ..Default::default()
        },
        UnitSystem::Imperial => CalculationInputs {
            length: Some(7.0),
            length_unit: Some(LengthUnit::Feet),
            width: Some(7.0),
            width_unit: Some(LengthUnit::Feet),
            depth: Some(30.0),
            depth_unit: Some(LengthUnit::Inches),
            pile_count: Some(4),
            pile_diameter: Some(18.0),
            pile_diameter_unit: Some(LengthUnit::Inches),
            pile_spacing: Some(54.0),
            pile_spacing_unit: Some(LengthUnit::Inches),
            cap_edge_distance: Some(15.0),
            cap_edge_distance_unit: Some(LengthUnit::Inches),
            concrete_unit_weight: Some(150.0),
            concrete_unit_weight_unit: Some(DensityUnit::PoundsPerCubicFoot),
            footing_bottom_bar_size: Some("#6".to_string()),
            footing_bottom_bar_spacing: Some(6.0),
            footing_bottom_bar_spacing_unit: Some(LengthUnit::Inches),
            footing_top_bar_size: Some("#5".to_string()),
            footing_top_bar_spacing: Some(8.0),
            footing_top_bar_spacing_unit: Some(LengthUnit::Inches),
            dowel_bar_size: Some("#6".to_string()),
            dowel_bar_count: Some(8),
            ..Default::default()
        },
    }
}

fn rectangular_wall(system: UnitSystem) -> CalculationInputs {
    match system {
        UnitSystem::Metric => CalculationInputs {
            depth: Some(200.0),
            depth_unit: Some(LengthUnit::Millimeters),
            length: Some(6.0),
            length_unit: Some(LengthUnit::Meters),
            height: Some(3.0),
            height_unit: Some(LengthUnit::Meters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            vertical_bar_size: Some("12mm".to_string()),
            vertical_bar_spacing: Some(200.0),
            vertical_bar_spacing_unit: Some(LengthUnit::Millimeters),
            horizontal_bar_size: Some("12mm".to_string()),
            horizontal_bar_spacing: Some(200.0),
            horizontal_bar_spacing_unit: Some(LengthUnit::Millimeters),
            reinforcement_layers: Some(ReinforcementLayers::Double),
            ..Default::default()
        },
        UnitSystem::Imperial => CalculationInputs {
            depth: Some(8.0),
            depth_unit: Some(LengthUnit::Inches),
            length: Some(20.0),
            length_unit: Some(LengthUnit::Feet),
            height: Some(10.0),
            height_unit: Some(LengthUnit::Feet),
            concrete_unit_weight: Some(150.0),
            concrete_unit_weight_unit: Some(DensityUnit::PoundsPerCubicFoot),
            vertical_bar_size: Some("#4".to_string()),
            vertical_bar_spacing: Some(8.0),
            vertical_bar_spacing_unit: Some(LengthUnit::Inches),
            horizontal_bar_size: Some("#4".to_string()),
            horizontal_bar_spacing: Some(8.0),
            horizontal_bar_spacing_unit: Some(LengthUnit::Inches),
            reinforcement_layers: Some(ReinforcementLayers::Double),
            ..Default::default()
        },
    }
}

fn retaining_wall(system: UnitSystem) -> CalculationInputs {
    match system {
        UnitSystem::Metric => CalculationInputs {
            stem_height: Some(3.0),
            stem_height_unit: Some(LengthUnit::Meters),
            stem_thickness_top: Some(200.0),
            stem_thickness_top_unit: Some(LengthUnit::Millimeters),
            stem_thickness_bottom: Some(300.0),
            stem_thickness_bottom_unit: Some(LengthUnit::Millimeters),
            footing_thickness: Some(400.0),
            footing_thickness_unit: Some(LengthUnit::Millimeters),
            toe_length: Some(1.0),
            toe_length_unit: Some(LengthUnit::Meters),
            heel_length: Some(1.5),
            heel_length_unit: Some(LengthUnit::Meters),
            soil_unit_weight: Some(18.0),
            soil_unit_weight_unit: Some(SoilUnitWeightUnit::KilonewtonsPerCubicMeter),
            soil_friction_angle: Some(30.0),
            soil_bearing_pressure: Some(150.0),
            soil_bearing_pressure_unit: Some(PressureUnit::Kilopascals),
            surcharge_load: Some(10.0),
            surcharge_load_unit: Some(PressureUnit::Kilopascals),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            vertical_bar_size: Some("16mm".to_string()),
            vertical_bar_spacing: Some(150.0),
            vertical_bar_spacing_unit: Some(LengthUnit::Millimeters),
            horizontal_bar_size: Some("12mm".to_string()),
            horizontal_bar_spacing: Some(200.0),
            horizontal_bar_spacing_unit: Some(LengthUnit::Millimeters),
            footing_bottom_bar_size: Some("16mm".to_string()),
            footing_bottom_bar_spacing: Some(150.0),
            footing_bottom_bar_spacing_unit: Some(LengthUnit::Millimeters),
            ..Default::default()
        },
        UnitSystem::Imperial => CalculationInputs {
            stem_height: Some(10.0),
            stem_height_unit: Some(LengthUnit::Feet),
            stem_thickness_top: Some(8.0),
            stem_thickness_top_unit: Some(LengthUnit::Inches),
            stem_thickness_bottom: Some(12.0),
            stem_thickness_bottom_unit: Some(LengthUnit::Inches),
            footing_thickness: Some(16.0),
            footing_thickness_unit: Some(LengthUnit::Inches),
            toe_length: Some(3.0),
            toe_length_unit: Some(LengthUnit::Feet),
            heel_length: Some(5.0),
            heel_length_unit: Some(LengthUnit::Feet),
            soil_unit_weight: Some(120.0),
            soil_unit_weight_unit: Some(SoilUnitWeightUnit::Pcf),
            soil_friction_angle: Some(30.0),
            soil_bearing_pressure: Some(3000.0),
            soil_bearing_pressure_unit: Some(PressureUnit::Psf),
            surcharge_load: Some(200.0),
            surcharge_load_unit: Some(PressureUnit::Psf),
            concrete_unit_weight: Some(150.0),
            concrete_unit_weight_unit: Some(DensityUnit::PoundsPerCubicFoot),
            vertical_bar_size: Some("#5".to_string()),
            vertical_bar_spacing: Some(6.0),
            vertical_bar_spacing_unit: Some(LengthUnit::Inches),
            horizontal_bar_size: Some("#4".to_string()),
            horizontal_bar_spacing: Some(8.0),
            horizontal_bar_spacing_unit: Some(LengthUnit::Inches),
            footing_bottom_bar_size: Some("#5".to_string()),
            footing_bottom_bar_spacing: Some(6.0),
            footing_bottom_bar_spacing_unit: Some(LengthUnit::Inches),
            ..Default::default()
        },
    }
}

fn diaphragm(system: UnitSystem) -> CalculationInputs {
    match system {
        UnitSystem::Metric => CalculationInputs {
            diaphragm_thickness: Some(150.0),
            diaphragm_thickness_unit: Some(LengthUnit::Millimeters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            collector_bar_size: Some("20mm".to_string()),
            collector_bar_count: Some(4),
            chord_bar_size: Some("20mm".to_string()),
            chord_bar_count: Some(4),
            shrinkage_bar_size: Some("12mm".to_string()),
            shrinkage_bar_spacing: Some(250.0),
            shrinkage_bar_spacing_unit: Some(LengthUnit::Millimeters),
            modeling_method: Some(ModelingMethod::Rigid),
            ..Default::default()
        },
        UnitSystem::Imperial => CalculationInputs {
            diaphragm_thickness: Some(6.0),
            diaphragm_thickness_unit: Some(LengthUnit::Inches),
            concrete_unit_weight: Some(150.0),
            concrete_unit_weight_unit: Some(DensityUnit::PoundsPerCubicFoot),
            collector_bar_size: Some("#5".to_string()),
            collector_bar_count: Some(4),
            chord_bar_size: Some("#5".to_string()),
            chord_bar_count: Some(4),
            shrinkage_bar_size: Some("#4".to_string()),
            shrinkage_bar_spacing: Some(10.0),
            shrinkage_bar_spacing_unit: Some(LengthUnit::Inches),
            modeling_method: Some(ModelingMethod::Rigid),
            ..Default::default()
        },
    }
}

fn bracket_corbel(system: UnitSystem) -> CalculationInputs {
    match system {
        UnitSystem::Metric => CalculationInputs {
            effective_depth: Some(400.0),
            effective_depth_unit: Some(LengthUnit::Millimeters),
            shear_span: Some(200.0),
            shear_span_unit: Some(LengthUnit::Millimeters),
            applied_load: Some(150.0),
            applied_load_unit: Some(ForceUnit::Kilonewtons),
            width: Some(300.0),
            width_unit: Some(LengthUnit::Millimeters),
            concrete_strength: Some(25.0),
            concrete_strength_unit: Some(StressUnit::Megapascals),
            steel_yield_strength: Some(420.0),
            steel_yield_strength_unit: Some(StressUnit::Megapascals),
            ..Default::default()
        },
        UnitSystem::Imperial => CalculationInputs {
            effective_depth: Some(16.0),
            effective_depth_unit: Some(LengthUnit::Inches),
            shear_span: Some(8.0),
            shear_span_unit: Some(LengthUnit::Inches),
            applied_load: Some(35.0),
            applied_load_unit: Some(ForceUnit::Kips),
            width: Some(12.0),
            width_unit: Some(LengthUnit::Inches),
            concrete_strength: Some(4000.0),
            concrete_strength_unit: Some(StressUnit::Psi),
            steel_yield_strength: Some(60.0),
            steel_yield_strength_unit: Some(StressUnit::Ksi),
            ..Default::default()
        },
    }
}

fn beam_column_joint(system: UnitSystem) -> CalculationInputs {
    match system {
        UnitSystem::Metric => CalculationInputs {
            column_depth: Some(450.0),
            column_depth_unit: Some(LengthUnit::Millimeters),
            beam_depth: Some(500.0),
            beam_depth_unit: Some(LengthUnit::Millimeters),
            factored_shear_vu: Some(300.0),
            factored_shear_vu_unit: Some(ForceUnit::Kilonewtons),
            joint_effective_width: Some(400.0),
            joint_effective_width_unit: Some(LengthUnit::Millimeters),
            concrete_strength: Some(25.0),
            concrete_strength_unit: Some(StressUnit::Megapascals),
            ..Default::default()
        },
        UnitSystem::Imperial => CalculationInputs {
            column_depth: Some(18.0),
            column_depth_unit: Some(LengthUnit::Inches),
            beam_depth: Some(20.0),
            beam_depth_unit: Some(LengthUnit::Inches),
            factored_shear_vu: Some(67.0),
            factored_shear_vu_unit: Some(ForceUnit::Kips),
            joint_effective_width: Some(16.0),
            joint_effective_width_unit: Some(LengthUnit::Inches),
            concrete_strength: Some(4000.0),
            concrete_strength_unit: Some(StressUnit::Psi),
            ..Default::default()
        },
    }
}

fn anchorage(system: UnitSystem) -> CalculationInputs {
    match system {
        UnitSystem::Metric => CalculationInputs {
            anchor_type: Some(AnchorType::CastIn),
            anchor_size: Some("M16".to_string()),
            concrete_strength: Some(25.0),
            concrete_strength_unit: Some(StressUnit::Megapascals),
            embedment_depth: Some(125.0),
            embedment_depth_unit: Some(LengthUnit::Millimeters),
            edge_distance: Some(150.0),
            edge_distance_unit: Some(LengthUnit::Millimeters),
            anchor_spacing: Some(300.0),
            anchor_spacing_unit: Some(LengthUnit::Millimeters),
            factored_tension: Some(25.0),
            factored_tension_unit: Some(ForceUnit::Kilonewtons),
            factored_shear: Some(15.0),
            factored_shear_unit: Some(ForceUnit::Kilonewtons),
            ..Default::default()
        },
        UnitSystem::Imperial => CalculationInputs {
            anchor_type: Some(AnchorType::CastIn),
            anchor_size: Some("5/8\"".to_string()),
            concrete_strength: Some(4000.0),
            concrete_strength_unit: Some(StressUnit::Psi),
            embedment_depth: Some(5.0),
            embedment_depth_unit: Some(LengthUnit::Inches),
            edge_distance: Some(6.0),
            edge_distance_unit: Some(LengthUnit::Inches),
            anchor_spacing: Some(12.0),
            anchor_spacing_unit: Some(LengthUnit::Inches),
            factored_tension: Some(5.5),
            factored_tension_unit: Some(ForceUnit::Kips),
            factored_shear: Some(3.5),
            factored_shear_unit: Some(ForceUnit::Kips),
            ..Default::default()
        },
    }
}
