// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use futures::{stream, Stream};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};
use url::Url;

use findit_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynAuthService, DynBlobStorage, DynImageSource, DynUserProfileRepository,
};
use crate::domain::images::models::{
    DecodedImage, EncodedImage, ImageReference, OrientedImage, RawImageBytes,
};
use crate::domain::shared::models::{Failure, ProgressState, UserId};
use crate::infra::images::{decode_image, encode_jpeg, IMAGE_OUTPUT_QUALITY};

#[derive(InjectDependencies)]
pub struct ProfileImageService {
    #[inject]
    auth_service: DynAuthService,
    #[inject]
    blob_storage: DynBlobStorage,
    #[inject]
    ctx: DynAppContext,
    #[inject]
    image_source: DynImageSource,
    #[inject]
    user_profile_repo: DynUserProfileRepository,
}

impl ProfileImageService {
    /// Reads the image behind `reference`, rotates it upright according to its EXIF orientation,
    /// re-encodes it as JPEG, uploads it and stores the resulting URL with the signed-in user's
    /// profile.
    ///
    /// The stream emits `Loading(true)` before each stage and ends with exactly one `Success`
    /// carrying the uploaded image's URL or one `Error`. Nothing runs until the stream is polled
    /// and a failing stage skips all remaining ones.
    pub fn process_and_upload(
        &self,
        reference: ImageReference,
    ) -> impl Stream<Item = ProgressState<Url>> + Send {
        let pipeline = self
            .auth_service
            .current_user_id()
            .map(|user_id| Pipeline {
                user_id,
                ctx: self.ctx.clone(),
                blob_storage: self.blob_storage.clone(),
                image_source: self.image_source.clone(),
                user_profile_repo: self.user_profile_repo.clone(),
            })
            .ok_or(Failure::NotSignedIn);

        stream::unfold(State::Start(pipeline, reference), |state| async move {
            match state {
                State::Start(Ok(pipeline), reference) => Some((
                    ProgressState::Loading(true),
                    State::Running(pipeline, Step::Read(reference)),
                )),
                State::Start(Err(failure), _) => {
                    Some((ProgressState::Error(failure.to_string()), State::Done))
                }
                State::Running(pipeline, step) => {
                    let stage = step.description();
                    debug!("Profile image: {stage}…");

                    match pipeline.run(step).await {
                        Ok(Advance::Next(step)) => Some((
                            ProgressState::Loading(true),
                            State::Running(pipeline, step),
                        )),
                        Ok(Advance::Finished(url)) => {
                            info!("Updated profile image of {} to {url}.", pipeline.user_id);
                            Some((ProgressState::Success(url), State::Done))
                        }
                        Err(failure) => {
                            warn!("Profile image pipeline failed while {stage}. {failure}");
                            Some((ProgressState::Error(failure.to_string()), State::Done))
                        }
                    }
                }
                State::Done => None,
            }
        })
    }
}

enum State {
    Start(Result<Pipeline, Failure>, ImageReference),
    Running(Pipeline, Step),
    Done,
}

enum Step {
    Read(ImageReference),
    Decode(RawImageBytes),
    Orient(DecodedImage),
    Encode(OrientedImage),
    Upload(EncodedImage),
    PersistUrl(Url),
}

enum Advance {
    Next(Step),
    Finished(Url),
}

impl Step {
    fn description(&self) -> &'static str {
        match self {
            Step::Read(_) => "reading",
            Step::Decode(_) => "decoding",
            Step::Orient(_) => "orienting",
            Step::Encode(_) => "compressing",
            Step::Upload(_) => "uploading",
            Step::PersistUrl(_) => "saving the image url",
        }
    }
}

struct Pipeline {
    user_id: UserId,
    ctx: DynAppContext,
    blob_storage: DynBlobStorage,
    image_source: DynImageSource,
    user_profile_repo: DynUserProfileRepository,
}

impl Pipeline {
    async fn run(&self, step: Step) -> Result<Advance, Failure> {
        let next = match step {
            Step::Read(reference) => {
                let bytes = self
                    .image_source
                    .read(&reference)
                    .await
                    .map_err(Failure::IO)?;
                Step::Decode(RawImageBytes(bytes))
            }
            Step::Decode(bytes) => {
                let decoded = run_blocking(move || decode_image(bytes), Failure::Decode).await?;
                debug!(
                    "Decoded profile image, rotating by {}°.",
                    decoded.orientation.degrees()
                );
                Step::Orient(decoded)
            }
            Step::Orient(decoded) => {
                let oriented =
                    run_blocking(move || Ok(decoded.into_oriented()), Failure::Decode).await?;
                Step::Encode(oriented)
            }
            Step::Encode(oriented) => {
                let encoded = run_blocking(
                    move || encode_jpeg(oriented, IMAGE_OUTPUT_QUALITY),
                    Failure::Encode,
                )
                .await?;
                Step::Upload(encoded)
            }
            Step::Upload(image) => {
                let path = self
                    .ctx
                    .profile_image_path(&format!("{}.jpg", self.user_id));
                debug!(
                    "Uploading {}x{} profile image ({} bytes) to {path}…",
                    image.width,
                    image.height,
                    image.data.len()
                );
                let url = self
                    .blob_storage
                    .upload(&path, image.data, &image.media_type)
                    .await
                    .map_err(Failure::Upload)?;
                Step::PersistUrl(url)
            }
            Step::PersistUrl(url) => {
                self.user_profile_repo
                    .set_profile_image_url(&self.user_id, &url)
                    .await
                    .map_err(Failure::Persist)?;
                return Ok(Advance::Finished(url));
            }
        };
        Ok(Advance::Next(next))
    }
}

/// Runs CPU bound image work off the async worker threads. The work is skipped if the caller
/// is gone by the time a blocking thread picks it up. Once started it runs to completion.
async fn run_blocking<T, F>(work: F, failure: fn(anyhow::Error) -> Failure) -> Result<T, Failure>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, Failure> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();

    tokio::task::spawn_blocking(move || {
        if tx.is_closed() {
            debug!("Skipping image work of a cancelled pipeline.");
            return;
        }
        _ = tx.send(work());
    });

    rx.await.map_err(|err| failure(err.into()))?
}
