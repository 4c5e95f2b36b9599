use crate::config::BlurConfig;
use crate::error::BlurError;
use crate::stripe_blur::driver::blur;
use crate::Image;
use image::{ImageBuffer, Rgba};

/// 行分割ブラー操作の結果型
pub type RowBlurResult<T> = Result<T, BlurError>;

/// 行単位で並列化した3x3ボックスブラーを提供するトレイト
///
/// 画像の行を複数のワーカーに連続した範囲として割り当て、
/// 各ワーカーが担当行のピクセルを3x3近傍の重み付き平均で置き換えます。
/// アルファチャンネルは変更されません。
///
/// 除数はピクセルの位置（角・辺・内部）だけで決まり、近傍の実数とは
/// 一致しません。そのため出力は正規化された平均の約2/3になります。
pub trait RowBlur {
    /// 指定した設定でブラーを適用する
    ///
    /// # 引数
    ///
    /// * `config` - ワーカー数とスケジューラ
    ///
    /// # 戻り値
    ///
    /// 同じ寸法のブラー済み画像、またはエラー
    ///
    /// # エラー
    ///
    /// * `BlurError::WorkerSpawn` - ワーカースレッドを起動できなかった場合
    /// * `BlurError::WorkerPanicked` - ワーカーがパニックした場合
    /// * `BlurError::ImageBufferCreationFailed` - 結果画像の作成に失敗した場合
    ///
    /// # Examples
    ///
    /// ```
    /// use image::{ImageBuffer, Rgba};
    /// use rowblur::{BlurConfig, Image, RowBlur};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let image: Image<Rgba<u8>> = ImageBuffer::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
    /// let blurred = image.row_blur(&BlurConfig::new(2)?)?;
    /// assert_eq!(blurred.get_pixel(1, 1), &Rgba([170, 170, 170, 255]));
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    fn row_blur(&self, config: &BlurConfig) -> RowBlurResult<Image<Rgba<u8>>>;

    /// デフォルト設定（4ワーカー、スコープ付きスレッド）でブラーを適用する
    fn row_blur_default(&self) -> RowBlurResult<Image<Rgba<u8>>> {
        self.row_blur(&BlurConfig::default())
    }
}

impl RowBlur for Image<Rgba<u8>> {
    fn row_blur(&self, config: &BlurConfig) -> RowBlurResult<Image<Rgba<u8>>> {
        let (width, height) = self.dimensions();
        let pixels = blur(self.as_raw(), width, height, config)?;

        ImageBuffer::from_raw(width, height, pixels).ok_or(BlurError::ImageBufferCreationFailed)
    }
}
