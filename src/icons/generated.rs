// Code generated by `heroicons-svg generate`; DO NOT EDIT.

use crate::icon::{IconRecord, Variant};

pub static ACADEMIC_CAP: IconRecord = IconRecord::template("academic-cap", Variant::Outline);
pub static ACADEMIC_CAP_MICRO: IconRecord = IconRecord::template("academic-cap-16-solid", Variant::Micro);
pub static ACADEMIC_CAP_MINI: IconRecord = IconRecord::template("academic-cap-20-solid", Variant::Mini);
pub static ACADEMIC_CAP_SOLID: IconRecord = IconRecord::template("academic-cap-solid", Variant::Solid);
pub static BELL: IconRecord = IconRecord::template("bell", Variant::Outline);
pub static BELL_SOLID: IconRecord = IconRecord::template("bell-solid", Variant::Solid);
pub static CHECK: IconRecord = IconRecord::template("check", Variant::Outline);
pub static CHECK_MICRO: IconRecord = IconRecord::template("check-16-solid", Variant::Micro);
pub static CHECK_MINI: IconRecord = IconRecord::template("check-20-solid", Variant::Mini);
pub static MOON: IconRecord = IconRecord::template("moon", Variant::Outline);
pub static MOON_MICRO: IconRecord = IconRecord::template("moon-16-solid", Variant::Micro);
pub static MOON_MINI: IconRecord = IconRecord::template("moon-20-solid", Variant::Mini);
pub static MOON_SOLID: IconRecord = IconRecord::template("moon-solid", Variant::Solid);
pub static SUN: IconRecord = IconRecord::template("sun", Variant::Outline);
pub static SUN_SOLID: IconRecord = IconRecord::template("sun-solid", Variant::Solid);
pub static X_MARK: IconRecord = IconRecord::template("x-mark", Variant::Outline);
pub static X_MARK_MICRO: IconRecord = IconRecord::template("x-mark-16-solid", Variant::Micro);
pub static X_MARK_SOLID: IconRecord = IconRecord::template("x-mark-solid", Variant::Solid);

/// Every generated template, sorted by constant name
pub static ALL: &[&IconRecord] = &[
    &ACADEMIC_CAP,
    &ACADEMIC_CAP_MICRO,
    &ACADEMIC_CAP_MINI,
    &ACADEMIC_CAP_SOLID,
    &BELL,
    &BELL_SOLID,
    &CHECK,
    &CHECK_MICRO,
    &CHECK_MINI,
    &MOON,
    &MOON_MICRO,
    &MOON_MINI,
    &MOON_SOLID,
    &SUN,
    &SUN_SOLID,
    &X_MARK,
    &X_MARK_MICRO,
    &X_MARK_SOLID,
];
