//! 临时提示

/// 带倒计时的提示，显示时覆盖状态栏消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    /// 剩余 Tick 数，归零后清除
    pub ticks_left: u8,
}

impl Notice {
    pub fn new(text: impl Into<String>, ticks: u8) -> Self {
        Self {
            text: text.into(),
            ticks_left: ticks,
        }
    }

    /// 倒计时减一，返回是否已到期
    pub fn tick(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.ticks_left == 0
    }
}
