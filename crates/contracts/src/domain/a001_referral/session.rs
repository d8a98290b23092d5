//! Состояние одного смонтированного виджета
//!
//! Два независимых флага: панель открыта/закрыта и окно благодарности
//! видно/скрыто. Поэтому благодарность может показываться при закрытой панели.

use super::aggregate::{FormField, ReferralFormData};

/// Фаза панели (без учёта окна благодарности)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPhase {
    Closed,
    Open,
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetSession {
    pub is_open: bool,
    pub show_thank_you: bool,
    pub is_submitting: bool,
    pub form: ReferralFormData,
}

impl WidgetSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> WidgetPhase {
        match (self.is_open, self.is_submitting) {
            (_, true) => WidgetPhase::Submitting,
            (true, false) => WidgetPhase::Open,
            (false, false) => WidgetPhase::Closed,
        }
    }

    /// Клик по кнопке-триггеру
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Клик по подложке или крестику. Введённые данные сбрасываются.
    ///
    /// Во время отправки закрытие не блокируется: результат отправки
    /// всё равно применится позже (last write wins).
    pub fn close(&mut self) {
        self.is_open = false;
        if !self.is_submitting {
            self.form = ReferralFormData::default();
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Начать отправку. Возвращает снимок формы на момент submit,
    /// либо `None`, если отправка уже идёт.
    pub fn begin_submit(&mut self) -> Option<ReferralFormData> {
        if self.is_submitting {
            return None;
        }
        self.is_submitting = true;
        Some(self.form.clone())
    }

    /// Оба вебхука отработали: форма очищается, панель закрывается,
    /// показывается благодарность.
    pub fn submit_succeeded(&mut self) {
        self.form = ReferralFormData::default();
        self.is_submitting = false;
        self.is_open = false;
        self.show_thank_you = true;
    }

    /// Ошибка транспорта: данные пользователя остаются для повторной отправки
    pub fn submit_failed(&mut self) {
        self.is_submitting = false;
    }

    pub fn dismiss_thank_you(&mut self) {
        self.show_thank_you = false;
    }
}
