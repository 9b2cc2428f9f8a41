//! 置顶维护
//!
//! 模态对话框、其他弹出层、全屏切换都会进入宿主的 top layer，并可能盖住覆盖层。
//! 监听这些信号（捕获阶段），只要来源不是覆盖层容器本身，就先隐藏再显示容器，
//! 把它重新放到 top layer 最上面。

use super::host::{ElementId, ListenerId, ListenerTarget, OverlayHost, Subscriber, Topic};
use tracing::{debug, trace};

#[derive(Debug)]
pub struct VisibilityHost {
    container: ElementId,
    listeners: Vec<ListenerId>,
    raises: u64,
}

impl VisibilityHost {
    /// 注册监听并立即置顶一次。
    pub fn attach(host: &mut dyn OverlayHost, container: ElementId) -> Self {
        let listeners = vec![
            // 模态对话框打开时会触发 focusin
            host.add_listener(ListenerTarget::Window, Topic::FocusIn, true, Subscriber::Visibility),
            // 其他 popover
            host.add_listener(ListenerTarget::Window, Topic::Toggle, true, Subscriber::Visibility),
            host.add_listener(
                ListenerTarget::Document,
                Topic::FullscreenChange,
                true,
                Subscriber::Visibility,
            ),
        ];
        let mut visibility = Self {
            container,
            listeners,
            raises: 0,
        };
        visibility.raise(host);
        visibility
    }

    /// `origin` 是触发信号的元素（未知时为 `None`）。
    pub fn on_signal(&mut self, host: &mut dyn OverlayHost, origin: Option<ElementId>) {
        if origin == Some(self.container) {
            trace!("信号来自覆盖层容器自身，忽略");
            return;
        }
        self.raise(host);
    }

    fn raise(&mut self, host: &mut dyn OverlayHost) {
        host.hide_popover(self.container);
        host.show_popover(self.container);
        self.raises += 1;
        debug!(container = ?self.container, raises = self.raises, "覆盖层已置顶");
    }

    pub fn raises(&self) -> u64 {
        self.raises
    }

    pub fn detach(self, host: &mut dyn OverlayHost) {
        for id in self.listeners {
            host.remove_listener(id);
        }
    }
}
