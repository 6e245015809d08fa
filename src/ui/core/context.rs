use std::rc::Rc;

use crate::{
    config::Config,
    logger::Logger,
    picker::{PickerEnv, PointerDocument},
    utils::datetime::{ChronoDateMath, DateMath},
};

/// Services shared by every component of one running app
pub struct AppContext {
    pub config: Config,
    pub logger: Logger,
    pub document: PointerDocument,
    pub dates: Rc<dyn DateMath>,
}

impl AppContext {
    pub fn new(config: Config, logger: Logger) -> Self {
        let dates: Rc<dyn DateMath> = Rc::new(ChronoDateMath::new(config.picker.week_start()));
        Self::with_dates(config, logger, dates)
    }

    /// Build a context around a specific date-math provider
    pub fn with_dates(config: Config, logger: Logger, dates: Rc<dyn DateMath>) -> Self {
        Self {
            config,
            logger,
            document: PointerDocument::new(),
            dates,
        }
    }

    pub fn picker_env(&self) -> PickerEnv {
        PickerEnv::new(Rc::clone(&self.dates), self.config.picker.date_format.clone())
    }
}
