use serde::{Deserialize, Serialize};

use super::aggregate::{calculate_estimate, EstimatorInput, KitchenStyle, Material, PriceEstimate};

/// Wizard screens, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    /// Area and material.
    Area,
    /// Style and number of units.
    Style,
    Result,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Area, WizardStep::Style, WizardStep::Result];

    /// 1-based position for the progress header.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Area => 1,
            WizardStep::Style => 2,
            WizardStep::Result => 3,
        }
    }

    pub fn label_ar(&self) -> &'static str {
        match self {
            WizardStep::Area => "المساحة",
            WizardStep::Style => "النمط",
            WizardStep::Result => "التقدير",
        }
    }
}

/// What happens once a price has been calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatePolicy {
    /// Show the result screen; the visitor asks for a consultation from there.
    #[default]
    ShowResult,
    /// Skip the result screen and go straight to the consultation form.
    OpenConsultation,
}

/// Everything the consultation flow receives from the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateSummary {
    pub area: u32,
    pub material: Material,
    pub style: KitchenStyle,
    pub units: u32,
    pub estimate: PriceEstimate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculateOutcome {
    /// Not on the style step yet; nothing changed.
    NotReady,
    /// The wizard moved to [`WizardStep::Result`].
    Displayed(PriceEstimate),
    /// The caller should open the consultation form with this prefill.
    ConsultationRequested(EstimateSummary),
}

/// Linear estimator wizard: `Area -> Style -> Result`.
///
/// `back` goes from `Style` to `Area`; `reset` from anywhere to a fresh
/// `Area`. Answers can only be edited before the result is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorWizard {
    step: WizardStep,
    input: EstimatorInput,
    estimate: Option<PriceEstimate>,
    policy: EstimatePolicy,
}

impl Default for EstimatorWizard {
    fn default() -> Self {
        Self::new(EstimatePolicy::default())
    }
}

impl EstimatorWizard {
    pub fn new(policy: EstimatePolicy) -> Self {
        Self {
            step: WizardStep::Area,
            input: EstimatorInput::default(),
            estimate: None,
            policy,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn input(&self) -> &EstimatorInput {
        &self.input
    }

    pub fn estimate(&self) -> Option<PriceEstimate> {
        self.estimate
    }

    pub fn policy(&self) -> EstimatePolicy {
        self.policy
    }

    fn editable(&self) -> bool {
        self.step != WizardStep::Result
    }

    pub fn set_area(&mut self, area: i64) -> bool {
        if self.editable() {
            self.input.set_area(area);
        }
        self.editable()
    }

    pub fn set_units(&mut self, units: i64) -> bool {
        if self.editable() {
            self.input.set_units(units);
        }
        self.editable()
    }

    pub fn select_material(&mut self, material: Material) -> bool {
        if self.editable() {
            self.input.set_material(material);
        }
        self.editable()
    }

    pub fn select_style(&mut self, style: KitchenStyle) -> bool {
        if self.editable() {
            self.input.set_style(style);
        }
        self.editable()
    }

    /// `Area -> Style`. Returns whether the step changed.
    pub fn next(&mut self) -> bool {
        if self.step == WizardStep::Area {
            self.step = WizardStep::Style;
            true
        } else {
            false
        }
    }

    /// `Style -> Area`. Returns whether the step changed.
    pub fn back(&mut self) -> bool {
        if self.step == WizardStep::Style {
            self.step = WizardStep::Area;
            true
        } else {
            false
        }
    }

    /// Price the current answers and apply the configured policy.
    ///
    /// Under [`EstimatePolicy::OpenConsultation`] the wizard stays where it
    /// is, keeping the estimate, so closing the form returns the visitor to
    /// the same screen. Only the style step can calculate.
    pub fn calculate(&mut self) -> CalculateOutcome {
        if self.step != WizardStep::Style {
            return CalculateOutcome::NotReady;
        }
        let estimate = calculate_estimate(&self.input);
        self.estimate = Some(estimate);
        match self.policy {
            EstimatePolicy::ShowResult => {
                self.step = WizardStep::Result;
                CalculateOutcome::Displayed(estimate)
            }
            EstimatePolicy::OpenConsultation => {
                CalculateOutcome::ConsultationRequested(self.summary(estimate))
            }
        }
    }

    /// Consultation prefill from the result screen.
    pub fn request_consultation(&self) -> Option<EstimateSummary> {
        match (self.step, self.estimate) {
            (WizardStep::Result, Some(estimate)) => Some(self.summary(estimate)),
            _ => None,
        }
    }

    /// "New calculation": defaults, first step, no estimate.
    pub fn reset(&mut self) {
        *self = Self::new(self.policy);
    }

    fn summary(&self, estimate: PriceEstimate) -> EstimateSummary {
        EstimateSummary {
            area: self.input.area(),
            material: self.input.material(),
            style: self.input.style(),
            units: self.input.units(),
            estimate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_shows_result_then_requests_consultation() {
        let mut wizard = EstimatorWizard::new(EstimatePolicy::ShowResult);
        assert_eq!(wizard.step(), WizardStep::Area);
        assert!(wizard.request_consultation().is_none());

        wizard.set_area(10);
        wizard.select_material(Material::Wood);
        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::Style);
        wizard.select_style(KitchenStyle::Modern);
        wizard.set_units(8);

        let outcome = wizard.calculate();
        let expected = PriceEstimate { min: 33912, max: 41448 };
        assert_eq!(outcome, CalculateOutcome::Displayed(expected));
        assert_eq!(wizard.step(), WizardStep::Result);

        let summary = wizard.request_consultation().unwrap();
        assert_eq!(summary.area, 10);
        assert_eq!(summary.material, Material::Wood);
        assert_eq!(summary.style, KitchenStyle::Modern);
        assert_eq!(summary.units, 8);
        assert_eq!(summary.estimate, expected);
    }

    #[test]
    fn back_only_from_style_step() {
        let mut wizard = EstimatorWizard::default();
        assert!(!wizard.back());
        wizard.next();
        assert!(wizard.back());
        assert_eq!(wizard.step(), WizardStep::Area);
        wizard.next();
        wizard.calculate();
        assert!(!wizard.back());
        assert!(!wizard.next());
        assert_eq!(wizard.step(), WizardStep::Result);
    }

    #[test]
    fn answers_are_frozen_on_the_result_screen() {
        let mut wizard = EstimatorWizard::default();
        wizard.next();
        wizard.calculate();
        assert_eq!(wizard.step(), WizardStep::Result);
        assert!(!wizard.set_area(40));
        assert!(!wizard.select_material(Material::Premium));
        assert_eq!(wizard.input().area(), 10);
        assert_eq!(wizard.input().material(), Material::Wood);
    }

    #[test]
    fn calculate_requires_the_style_step() {
        let mut wizard = EstimatorWizard::new(EstimatePolicy::ShowResult);
        assert_eq!(wizard.calculate(), CalculateOutcome::NotReady);
        assert_eq!(wizard.step(), WizardStep::Area);
        assert_eq!(wizard.estimate(), None);

        wizard.next();
        wizard.calculate();
        assert_eq!(wizard.calculate(), CalculateOutcome::NotReady);
        assert_eq!(wizard.step(), WizardStep::Result);

        let mut wizard = EstimatorWizard::new(EstimatePolicy::OpenConsultation);
        assert_eq!(wizard.calculate(), CalculateOutcome::NotReady);
        assert_eq!(wizard.step(), WizardStep::Area);
    }

    #[test]
    fn reset_restores_defaults_and_keeps_policy() {
        let mut wizard = EstimatorWizard::new(EstimatePolicy::ShowResult);
        wizard.set_area(33);
        wizard.next();
        wizard.select_style(KitchenStyle::Dark);
        wizard.calculate();
        wizard.reset();
        assert_eq!(wizard.step(), WizardStep::Area);
        assert_eq!(wizard.estimate(), None);
        assert_eq!(*wizard.input(), EstimatorInput::default());
        assert_eq!(wizard.policy(), EstimatePolicy::ShowResult);
    }

    #[test]
    fn open_consultation_policy_skips_result_screen() {
        let mut wizard = EstimatorWizard::new(EstimatePolicy::OpenConsultation);
        wizard.set_area(5);
        wizard.select_material(Material::Mdf);
        wizard.next();
        wizard.select_style(KitchenStyle::Dark);
        wizard.set_units(4);

        match wizard.calculate() {
            CalculateOutcome::ConsultationRequested(summary) => {
                assert_eq!(summary.estimate, PriceEstimate { min: 9630, max: 11771 });
                assert_eq!(summary.area, 5);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(wizard.step(), WizardStep::Style);
        assert!(wizard.estimate().is_some());
        assert!(wizard.request_consultation().is_none());
    }

    #[test]
    fn setters_clamp_through_the_wizard() {
        let mut wizard = EstimatorWizard::default();
        wizard.set_area(500);
        wizard.set_units(0);
        assert_eq!(wizard.input().area(), 50);
        assert_eq!(wizard.input().units(), 4);
    }
}
