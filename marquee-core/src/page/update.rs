use super::{LandingPage, PageMessage, STATS_ID};
use crate::card_stack::CardStackMessage;
use crate::newsletter::FormNotice;
use crate::prefs::PreferenceStore;
use crate::slider::SliderMessage;
use crate::timers::{Scheduler, TimerEvent};
use crate::toast::ToastKind;

impl<T: Scheduler + Clone, P: PreferenceStore> LandingPage<T, P> {
    /// Apply one host message.
    pub fn update(&mut self, message: PageMessage) {
        if self.disposed {
            log::trace!("page disposed, dropping {:?}", message);
            return;
        }
        log::trace!("{:?}", message);

        match message {
            PageMessage::Loaded => self.loading.page_loaded(),
            PageMessage::CardStack(inner) => self.route_card_stack(inner),
            PageMessage::Slider(inner) => self.route_slider(inner),
            PageMessage::Key(key) => {
                self.route_card_stack(CardStackMessage::Key(key.clone()));
                self.route_slider(SliderMessage::Key(key));
            }
            PageMessage::Timer(event) => self.handle_timer(event),

            PageMessage::ToggleTheme => {
                let mode = self.theme.toggle();
                self.toasts.show(mode.switched_message(), ToastKind::Success);
            }
            PageMessage::ToggleMenu => self.nav.toggle_menu(),
            PageMessage::NavClicked(target) => {
                if let Some(request) = self.nav.link_clicked(&target) {
                    self.scroll_requests.push(request);
                }
            }
            PageMessage::ScrollToFeatures => {
                let request = self.nav.scroll_to_features();
                self.scroll_requests.push(request);
            }
            PageMessage::LoginClicked => {
                self.toasts.show("Redirecting to login...", ToastKind::Success);
                self.nav.login_clicked();
            }
            PageMessage::BackToTop => {
                let request = self.scroll.back_to_top_clicked();
                self.scroll_requests.push(request);
            }

            PageMessage::Scrolled(metrics) => self.scroll.update(metrics),
            PageMessage::HeaderVisibility(intersecting) => {
                self.nav.header_visibility(intersecting)
            }
            PageMessage::SectionVisibility { id, ratio } => {
                if self.sections.report(&id, ratio) {
                    log::debug!("Section {id} revealed");
                }
                self.entries.report(&id, ratio);
            }
            PageMessage::ImageVisibility { id, ratio } => {
                if self.images.report(&id, ratio) {
                    log::debug!("Image {id} loaded");
                }
            }
            PageMessage::StatsVisibility(ratio) => {
                if self.stats.report(STATS_ID, ratio) {
                    log::debug!("Stats visible, starting {} counters", self.counters.len());
                    self.counters_started = true;
                }
            }
            PageMessage::CounterFrame => {
                if self.counters_started {
                    for counter in &mut self.counters {
                        counter.tick();
                    }
                }
            }

            PageMessage::TabClicked(id) => match self.tabs.as_mut() {
                Some(tabs) => {
                    tabs.activate(&id);
                }
                None => log::trace!("tab {id} clicked without a tab panel"),
            },

            PageMessage::EmailInput(value) => self.newsletter.set_email(value),
            PageMessage::EmailChar(ch) => self.newsletter.push_char(ch),
            PageMessage::EmailBackspace => self.newsletter.pop_char(),
            PageMessage::SubmitNewsletter => {
                let notice = self.newsletter.submit();
                self.show_notice(notice);
            }

            PageMessage::Dispose => self.dispose(),
        }
    }

    fn handle_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::CardStack(timer) => {
                self.route_card_stack(CardStackMessage::Timer(timer))
            }
            TimerEvent::SlideAdvance => self.route_slider(SliderMessage::Advance),
            TimerEvent::ToastExpired(id) => self.toasts.expire(id),
            TimerEvent::Loading(stage) => self.loading.advance(stage),
            TimerEvent::ThemeButtonSettled => self.theme.settle_button(),
            TimerEvent::NewsletterDelivered => {
                let notice = self.newsletter.delivered();
                self.show_notice(notice);
            }
            TimerEvent::LoginRedirect => {
                if let Some(url) = self.nav.redirect_due() {
                    log::info!("Redirecting to {url}");
                    self.navigation = Some(url.to_string());
                }
            }
        }
    }

    fn route_card_stack(&mut self, message: CardStackMessage) {
        match self.card_stack.as_mut() {
            Some(stack) => stack.update(message),
            None => log::trace!("no card stack, dropping {:?}", message),
        }
    }

    fn route_slider(&mut self, message: SliderMessage) {
        match self.slider.as_mut() {
            Some(slider) => slider.update(message),
            None => log::trace!("no slider, dropping {}", message.name()),
        }
    }

    fn show_notice(&mut self, notice: Option<FormNotice>) {
        if let Some(FormNotice { message, kind }) = notice {
            self.toasts.show(message, kind);
        }
    }

    fn dispose(&mut self) {
        if let Some(stack) = self.card_stack.as_mut() {
            stack.dispose();
        }
        if let Some(slider) = self.slider.as_mut() {
            slider.stop_auto_slide();
        }
        self.disposed = true;
        log::debug!("Landing page disposed");
    }
}
